//! Maps the active settings and profile to the set of generator tasks to run.

use crate::domain::manifest::Profile;
use crate::domain::settings::{BuildVariant, Settings};
use crate::domain::task::{ConfigLabel, GeneratorFamily, TaskSpec};

/// Decide, from settings and the active profile alone, which generator
/// invocations a run performs.
///
/// The platform-native primary family always runs with the default label.
/// Debug builds schedule a second primary invocation under the alternate
/// label so a debug-only configuration is produced alongside the normal one.
/// The cmake family, when enabled by the profile, brings its toolchain
/// companion unconditionally, independent of the build variant.
pub fn select_tasks(
    settings: &Settings,
    profile: &Profile,
    debug_label: &ConfigLabel,
) -> Vec<TaskSpec> {
    let primary = GeneratorFamily::native_for(settings.os());

    let mut tasks = vec![TaskSpec::new(primary, ConfigLabel::Default)];

    if settings.build_variant() == BuildVariant::Debug {
        push_unique(&mut tasks, TaskSpec::new(primary, debug_label.clone()));
    }

    for enabled in &profile.generators {
        let spec = TaskSpec {
            family: enabled.family,
            label: ConfigLabel::Default,
            required: enabled.required,
        };
        push_unique(&mut tasks, spec);
        if enabled.family == GeneratorFamily::Cmake {
            let companion = TaskSpec {
                family: GeneratorFamily::CmakeToolchain,
                label: ConfigLabel::Default,
                required: enabled.required,
            };
            push_unique(&mut tasks, companion);
        }
    }

    tasks
}

/// Keep exactly one task per (family, label) pair; a repeated request only
/// strengthens the required flag.
fn push_unique(tasks: &mut Vec<TaskSpec>, spec: TaskSpec) {
    match tasks.iter_mut().find(|t| t.family == spec.family && t.label == spec.label) {
        Some(existing) => existing.required |= spec.required,
        None => tasks.push(spec),
    }
}
