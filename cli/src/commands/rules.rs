//! # SafeSpace Rules Command
//!
//! File: cli/src/commands/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Lists the active FAQ rule table in precedence order, followed by the
//! default answer. Loading the table also validates it, so this doubles as
//! a check for a custom `--rules` file.
//!
use crate::commands::load_responder;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use safespace_core::FaqResponder;

/// Arguments for `safespace rules`.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Only print the patterns, one per line.
    #[arg(long)]
    pub patterns_only: bool,
}

/// Handles `safespace rules`.
pub fn handle_rules(args: RulesArgs, config: &Config) -> Result<()> {
    let responder = load_responder(config)?;
    print!("{}", render_rules(&responder, args.patterns_only));
    Ok(())
}

fn render_rules(responder: &FaqResponder, patterns_only: bool) -> String {
    let mut out = String::new();
    for (index, rule) in responder.rules().enumerate() {
        if patterns_only {
            out.push_str(&format!("{}\n", rule.pattern));
        } else {
            out.push_str(&format!("{:>2}. /{}/\n    {}\n", index + 1, rule.pattern, rule.answer));
        }
    }
    if !patterns_only {
        out.push_str(&format!("Default: {}\n", responder.default_answer()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use safespace_core::{FaqRule, RuleTable};

    fn responder() -> FaqResponder {
        FaqResponder::new(RuleTable {
            default_answer: "Ask again.".into(),
            rules: vec![
                FaqRule::new("hours", "9-5"),
                FaqRule::new("cost", "Free"),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_render_rules_full() {
        assert_eq!(
            render_rules(&responder(), false),
            " 1. /hours/\n    9-5\n 2. /cost/\n    Free\nDefault: Ask again.\n"
        );
    }

    #[test]
    fn test_render_rules_patterns_only() {
        assert_eq!(render_rules(&responder(), true), "hours\ncost\n");
    }
}
