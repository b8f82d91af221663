//! Embedded template environment shared by all generators.

use std::sync::OnceLock;

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// The shared template environment, compiled once from the embedded sources.
///
/// Undefined variables are a hard error so a template/context mismatch never
/// produces silently incomplete artifacts.
pub fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        add_entries(&mut env, TEMPLATE_DIR.entries());
        env
    })
}

fn add_entries(env: &mut Environment<'static>, entries: &'static [DirEntry<'static>]) {
    for entry in entries {
        match entry {
            DirEntry::File(file) => {
                if let Some(source) = file.contents_utf8()
                    && let Some(name) = file.path().to_str()
                {
                    env.add_template(name, source).expect("embedded template must parse");
                }
            }
            DirEntry::Dir(dir) => add_entries(env, dir.entries()),
        }
    }
}

/// Render an embedded template with the given context.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, AppError> {
    let template = environment().get_template(name).map_err(|e| AppError::Template {
        name: name.to_string(),
        details: e.to_string(),
    })?;
    template.render(ctx).map_err(|e| AppError::Template {
        name: name.to_string(),
        details: e.to_string(),
    })
}
