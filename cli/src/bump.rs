use std::path::Path;
use tracing::debug;
use version::{Component, Operation, Update, parse_component_value};

use crate::cli::FileArgs;
use crate::error::Result;
use crate::targets;
use crate::ui;

/// Executes the increment command
pub fn increment(component: &str, amount: u64, files: &FileArgs, config: Option<&Path>) -> Result<()> {
    let component: Component = component.parse()?;
    run(Operation::Increment { component, amount }, files, config)
}

/// Executes the decrement command
pub fn decrement(component: &str, amount: u64, files: &FileArgs, config: Option<&Path>) -> Result<()> {
    let component: Component = component.parse()?;
    run(Operation::Decrement { component, amount }, files, config)
}

/// Executes the set command
pub fn set(component: &str, value: &str, files: &FileArgs, config: Option<&Path>) -> Result<()> {
    let component: Component = component.parse()?;
    let value = parse_component_value(value)?;
    run(Operation::Set { component, value }, files, config)
}

// Arguments are validated by the callers, so nothing here runs for a bad
// component or value.
fn run(operation: Operation, files: &FileArgs, config: Option<&Path>) -> Result<()> {
    let targets = targets::resolve(&files.files, config)?;
    debug!(?operation, count = targets.files.len(), "updating files");

    for path in &targets.files {
        let update = version::update_file(path, &operation, &targets.settings)?;
        warn_if_clamped(&operation, &update);
        ui::update_line(path, &update);
    }

    Ok(())
}

fn warn_if_clamped(operation: &Operation, update: &Update) {
    if let Operation::Decrement { amount, .. } = *operation {
        let component = operation.component();
        let current = update.old.get(component);
        if amount > current {
            ui::warning_message(&format!(
                "{component} is {current}, cannot subtract {amount}; clamped to 0"
            ));
        }
    }
}
