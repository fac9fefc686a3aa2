//! Command table of the `clirouter` binary.
//!
//! A small component workspace: the app context holds the workspace, the
//! component context is derived from it by the `<component>` parameter.

use std::sync::Arc;
use std::time::Duration;

use clirouter::{middleware, BoxError, Error, Request, Router};

/// A component known to the workspace.
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub image: String,
    pub tasks: Vec<String>,
}

/// All components, shared through the request context.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub components: Vec<Component>,
}

impl Workspace {
    /// The built-in demo workspace.
    pub fn demo() -> Self {
        let component = |name: &str, image: &str, tasks: &[&str]| Component {
            name: name.to_string(),
            image: image.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        };
        Self {
            components: vec![
                component("cv-server", "registry.local/cv-server", &["migrate", "seed"]),
                component("web", "registry.local/web", &["lint"]),
            ],
        }
    }

    fn find(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("workspace not available")]
    NoWorkspace,

    #[error("unknown component {0:?}")]
    UnknownComponent(String),

    #[error("component {component:?} has no task {task:?}")]
    UnknownTask { component: String, task: String },
}

fn resolve_workspace(req: &Request) -> Result<Arc<Workspace>, BoxError> {
    req.context()
        .value::<Arc<Workspace>>()
        .cloned()
        .ok_or_else(|| CommandError::NoWorkspace.into())
}

fn resolve_component(ws: &Arc<Workspace>, req: &Request) -> Result<Component, BoxError> {
    let name = req.params().require("component")?;
    ws.find(name)
        .cloned()
        .ok_or_else(|| CommandError::UnknownComponent(name.to_string()).into())
}

/// Build the router for the binary.
pub fn router() -> Router {
    let mut r = Router::new();

    r.handle("version", "Show version", |_| {
        println!("clirouter {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    });

    r.group(|b| {
        let mut b = b.with(middleware::trace());
        let mut b = b.with(middleware::cancellation());
        let mut ws = b.with_context(resolve_workspace);

        ws.handle("1 comp list", "List components", |_req, ws| {
            for c in &ws.components {
                println!("{}", c.name);
            }
            Ok(())
        });

        ws.route("1 comp <component>", |b| {
            let mut comp = b.derive(resolve_component);

            comp.handle("info", "Show component details", |_req, c| {
                println!("name:  {}", c.name);
                println!("image: {}", c.image);
                println!("tasks: {}", c.tasks.join(", "));
                Ok(())
            });

            comp.handle("image build", "Build the component image", |req, c| {
                for _step in 0..3 {
                    if req.context().is_cancelled() {
                        return Err(Error::Cancelled.into());
                    }
                    std::thread::sleep(Duration::from_millis(100));
                }
                println!("built {} {}", c.image, req.extra().join(" "));
                Ok(())
            });

            comp.handle("run <task>", "Run a component task", |req, c| {
                let task = req.params().require("task")?;
                if !c.tasks.iter().any(|t| t == task) {
                    return Err(CommandError::UnknownTask {
                        component: c.name.clone(),
                        task: task.to_string(),
                    }
                    .into());
                }
                println!("{}: running {} {}", c.name, task, req.extra().join(" "));
                Ok(())
            });
        });
    });

    r
}
