//! Typed contexts: resolver chains, failure propagation, middleware ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clirouter::{with_context_handler, BoxError, Context, Request, Router};

mod common;

#[derive(Debug, Clone, PartialEq)]
struct App {
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Component {
    app: String,
    name: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("app not configured")]
struct AppMissing;

fn resolve_app(req: &Request) -> Result<App, BoxError> {
    req.context().value::<App>().cloned().ok_or_else(|| AppMissing.into())
}

fn resolve_component(app: &App, req: &Request) -> Result<Component, BoxError> {
    Ok(Component {
        app: app.name.clone(),
        name: req.params().require("component")?.to_string(),
    })
}

#[test]
fn test_two_layer_chain() {
    let trace = common::Trace::new();
    let mut r = Router::new();
    r.group(|b| {
        let mut app = b.with_context(resolve_app);
        app.route("comp <component>", |b| {
            let mut comp = b.derive(resolve_component);
            let t = trace.clone();
            comp.handle("image build", "Build images", move |req, c| {
                t.push(format!("{}/{} {:?}", c.app, c.name, req.extra()));
                Ok(())
            });
        });
    });

    let ctx = Context::background().with_value(App { name: "cli-app".into() });
    r.dispatch(Some(ctx), &["comp", "cv-server", "image", "build", "--push"])
        .unwrap();
    assert_eq!(trace.steps(), [r#"cli-app/cv-server ["--push"]"#]);
}

#[test]
fn test_parent_failure_stops_chain() {
    let child_calls = Arc::new(AtomicUsize::new(0));
    let handler_calls = Arc::new(AtomicUsize::new(0));

    let mut r = Router::new();
    r.group(|b| {
        let mut app = b.with_context(resolve_app);
        let calls = child_calls.clone();
        let mut comp = app.derive(move |app: &App, req| {
            calls.fetch_add(1, Ordering::SeqCst);
            resolve_component(app, req)
        });
        let calls = handler_calls.clone();
        comp.handle("comp <component> info", "Info", move |_req, _c| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
    });

    let err = r.dispatch(None, &["comp", "x", "info"]).unwrap_err();
    let cause = err.command().and_then(|e| e.downcast_ref::<AppMissing>());
    assert_eq!(cause, Some(&AppMissing));
    assert_eq!(child_calls.load(Ordering::SeqCst), 0);
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_child_failure_skips_handler() {
    #[derive(Debug, thiserror::Error)]
    #[error("unknown component {0}")]
    struct Unknown(String);

    let handler_calls = Arc::new(AtomicUsize::new(0));
    let mut r = Router::new();
    r.group(|b| {
        let mut app = b.with_context(resolve_app);
        let mut comp = app.derive(|_app: &App, req| -> Result<Component, BoxError> {
            Err(Unknown(req.params().require("component")?.to_string()).into())
        });
        let calls = handler_calls.clone();
        comp.handle("comp <component> info", "Info", move |_req, _c| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
    });

    let ctx = Context::background().with_value(App { name: "cli-app".into() });
    let err = r.dispatch(Some(ctx), &["comp", "ghost", "info"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown component ghost");
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_resolvers_run_per_invocation() {
    let resolved = Arc::new(AtomicUsize::new(0));
    let counter = resolved.clone();

    let mut r = Router::new();
    r.group(|b| {
        let mut n = b.with_context(move |_req| Ok(counter.fetch_add(1, Ordering::SeqCst)));
        n.handle("a", "", |_req, _n| Ok(()));
        n.handle("b", "", |_req, _n| Ok(()));
    });

    assert_eq!(resolved.load(Ordering::SeqCst), 0);
    r.dispatch(None, &["a"]).unwrap();
    r.dispatch(None, &["b"]).unwrap();
    r.dispatch(None, &["a"]).unwrap();
    assert_eq!(resolved.load(Ordering::SeqCst), 3);
}

#[test]
fn test_middleware_runs_before_resolvers() {
    let trace = common::Trace::new();
    let mut r = Router::new();
    r.group(|b| {
        let t = trace.clone();
        let mut app = b.with_context(move |_req| {
            t.push("resolve");
            Ok(App { name: "cli-app".into() })
        });
        let mut app = app.with(trace.middleware("A"));
        let t = trace.clone();
        app.handle("x", "", move |_req, _app| {
            t.push("handler");
            Ok(())
        });
    });

    r.dispatch(None, &["x"]).unwrap();
    assert_eq!(
        trace.steps(),
        ["before-A", "resolve", "handler", "after-A"]
    );
}

#[test]
fn test_derive_with_parent_keeps_both() {
    let got = Arc::new(std::sync::Mutex::new(None));
    let sink = got.clone();

    let mut r = Router::new();
    r.group(|b| {
        let mut app = b.with_context(resolve_app);
        let mut both = app.derive_with_parent(resolve_component);
        both.handle("comp <component>", "Show", move |_req, pc| {
            *sink.lock().unwrap() = Some(pc.into_parts());
            Ok(())
        });
    });

    let ctx = Context::background().with_value(App { name: "cli-app".into() });
    r.dispatch(Some(ctx), &["comp", "web"]).unwrap();

    let (app, comp) = got.lock().unwrap().take().unwrap();
    assert_eq!(app, App { name: "cli-app".into() });
    assert_eq!(comp, Component { app: "cli-app".into(), name: "web".into() });
}

#[test]
fn test_context_handler_without_builder() {
    let trace = common::Trace::new();
    let t = trace.clone();
    let handler = with_context_handler(resolve_app, move |_req, app: App| {
        t.push(app.name);
        Ok(())
    });

    let mut r = Router::new();
    r.handle("whoami", "Show app", move |req| handler(req));

    assert!(r.dispatch(None, &["whoami"]).is_err());
    let ctx = Context::background().with_value(App { name: "cli-app".into() });
    r.dispatch(Some(ctx), &["whoami"]).unwrap();
    assert_eq!(trace.steps(), ["cli-app"]);
}

#[test]
fn test_with_all_wraps_typed_routes_in_order() {
    let trace = common::Trace::new();
    let mut r = Router::new();
    r.group(|b| {
        let mut app = b.with_context(resolve_app);
        let mut app = app.with_all([trace.middleware("A"), trace.middleware("B")]);
        let t = trace.clone();
        app.handle("x", "", move |_req, app| {
            t.push(app.name);
            Ok(())
        });
    });

    let ctx = Context::background().with_value(App { name: "cli-app".into() });
    r.dispatch(Some(ctx), &["x"]).unwrap();
    assert_eq!(
        trace.steps(),
        ["before-A", "before-B", "cli-app", "after-B", "after-A"]
    );
}

#[test]
fn test_layer_resolver_includes_ancestors() {
    let mut resolver = None;
    let mut r = Router::new();
    r.group(|b| {
        let mut app = b.with_context(resolve_app);
        let comp = app.derive(resolve_component);
        resolver = Some(comp.resolver());
    });
    let resolver = resolver.unwrap();

    let mut params = clirouter::Params::new();
    params.insert("component", "web");
    let ctx = Context::background().with_value(App { name: "cli-app".into() });
    let req = Request::new(ctx, vec!["comp".into(), "web".into()], params, 2);
    assert_eq!(
        resolver(&req).unwrap(),
        Component { app: "cli-app".into(), name: "web".into() }
    );

    let bare = req.with_context(Context::background());
    let err = resolver(&bare).unwrap_err();
    assert!(err.downcast_ref::<AppMissing>().is_some());
}
