//! Operator dialogue
//!
//! A run asks the operator three kinds of questions: whether the root is
//! the intended one, whether the rule table is acceptable (and which
//! replacement to change if not), and whether each proposed rename may be
//! applied. [`Prompter`] gathers them so a session can be driven by a real
//! terminal ([`InteractivePrompter`]), by automation ([`AssumeYes`]) or by a
//! script in tests.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

use super::output::TerminalOutput;
use crate::actions::{PlannedGroup, RenameConfirmer, RenameProposal, RenameResult};
use crate::error::RenamarionError;
use crate::rules::RuleSetBuilder;

/// Every decision a rename session needs from its operator
pub trait Prompter: RenameConfirmer {
    /// Whether the session should continue with `root`
    fn confirm_root(&mut self, root: &Path) -> Result<bool, RenamarionError>;

    /// Let the operator adjust replacements before the rules are frozen
    fn review_rules(&mut self, builder: &mut RuleSetBuilder) -> Result<(), RenamarionError>;
}

/// Asks on the terminal with `dialoguer`
pub struct InteractivePrompter {
    output: TerminalOutput,
}

impl InteractivePrompter {
    pub fn new() -> Self {
        Self {
            output: TerminalOutput::new(),
        }
    }
}

impl Default for InteractivePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameConfirmer for InteractivePrompter {
    fn begin_group(&mut self, group: &PlannedGroup) {
        println!();
        print!("{}", self.output.format_group_header(group));
    }

    fn confirm(&mut self, proposal: &RenameProposal) -> Result<bool, RenamarionError> {
        println!("{}", self.output.format_proposal(proposal));
        Ok(Confirm::new()
            .with_prompt("Rename?")
            .default(false)
            .interact()?)
    }

    fn report(&mut self, result: &RenameResult) {
        println!("{}", self.output.format_result(result));
    }
}

impl Prompter for InteractivePrompter {
    fn confirm_root(&mut self, _root: &Path) -> Result<bool, RenamarionError> {
        Ok(Confirm::new()
            .with_prompt("Is this path the one you planned?")
            .default(true)
            .interact()?)
    }

    fn review_rules(&mut self, builder: &mut RuleSetBuilder) -> Result<(), RenamarionError> {
        loop {
            println!();
            print!("{}", self.output.format_rules(builder.iter()));

            let accepted = Confirm::new()
                .with_prompt("Do you find this to be ok?")
                .default(true)
                .interact()?;
            if accepted {
                return Ok(());
            }

            let keys = builder.editable_keys();
            if keys.is_empty() {
                println!("{}", "No rule can be edited.".yellow());
                return Ok(());
            }

            let labels: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
            let index = Select::new()
                .with_prompt("Which character do you want to change?")
                .items(&labels)
                .default(0)
                .interact()?;
            let key = &keys[index];

            let replacement = {
                let current: &RuleSetBuilder = builder;
                Input::<String>::new()
                    .with_prompt(format!("Replace {} with", key))
                    .allow_empty(true)
                    .validate_with(|input: &String| {
                        current
                            .validate_replacement(key, input)
                            .map_err(|e| e.to_string())
                    })
                    .interact_text()?
            };

            builder.set_replacement(key, replacement)?;
        }
    }
}

/// Accepts the root, the default rules and every rename without asking.
///
/// Proposals and results are still printed so the run leaves a trace.
pub struct AssumeYes {
    output: TerminalOutput,
}

impl AssumeYes {
    pub fn new() -> Self {
        Self {
            output: TerminalOutput::new(),
        }
    }
}

impl Default for AssumeYes {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameConfirmer for AssumeYes {
    fn begin_group(&mut self, group: &PlannedGroup) {
        println!();
        print!("{}", self.output.format_group_header(group));
    }

    fn confirm(&mut self, proposal: &RenameProposal) -> Result<bool, RenamarionError> {
        println!("{}", self.output.format_proposal(proposal));
        Ok(true)
    }

    fn report(&mut self, result: &RenameResult) {
        println!("{}", self.output.format_result(result));
    }
}

impl Prompter for AssumeYes {
    fn confirm_root(&mut self, _root: &Path) -> Result<bool, RenamarionError> {
        Ok(true)
    }

    fn review_rules(&mut self, builder: &mut RuleSetBuilder) -> Result<(), RenamarionError> {
        print!("{}", self.output.format_rules(builder.iter()));
        Ok(())
    }
}
