use gitgate::config::Config;
use gitgate::eval::{PolicyEvaluator, Verdict};

fn verdict_for(command: &str, wrapper: bool) -> Verdict {
    gitgate::evaluate(command, wrapper)
}

fn rule_for(command: &str, wrapper: bool) -> Option<&'static str> {
    verdict_for(command, wrapper).diagnostic().map(|d| d.rule)
}

fn strict_verdict_for(command: &str, wrapper: bool) -> Verdict {
    let mut config = Config::default_config();
    config.wrapper.strict = true;
    let evaluator = PolicyEvaluator::from_config(&config).unwrap();
    let probe = move || wrapper;
    evaluator.evaluate(command, &probe)
}

/// `decision_test!(name, command, wrapper_present, Allow | Block)`
macro_rules! decision_test {
    ($name:ident, $cmd:expr, $wrapper:expr, Allow) => {
        #[test]
        fn $name() {
            assert_eq!(
                verdict_for($cmd, $wrapper),
                Verdict::Allow,
                "command: {} (wrapper: {})",
                $cmd,
                $wrapper,
            );
        }
    };
    ($name:ident, $cmd:expr, $wrapper:expr, Block) => {
        #[test]
        fn $name() {
            let v = verdict_for($cmd, $wrapper);
            assert!(v.is_block(), "command: {} (wrapper: {})", $cmd, $wrapper);
            assert_eq!(v.exit_code(), 2);
        }
    };
}

// ── BLOCK: git reset --hard, with or without wrapper ──

decision_test!(block_reset_hard, "git reset --hard", false, Block);
decision_test!(block_reset_hard_head, "git reset --hard HEAD~1", false, Block);
decision_test!(block_reset_hard_wrapper_present, "git reset --hard HEAD", true, Block);
decision_test!(block_reset_hard_tabs, "git\treset\t--hard", false, Block);
decision_test!(block_reset_hard_spaces, "git    reset   --hard origin/main", false, Block);
decision_test!(block_reset_hard_chained, "git fetch && git reset --hard origin/main", false, Block);
decision_test!(block_reset_hard_after_semi, "cd repo; git reset --hard", false, Block);
decision_test!(block_reset_hard_subshell, "(git reset --hard)", false, Block);
decision_test!(block_reset_hard_substitution, "echo $(git reset --hard)", false, Block);
decision_test!(block_reset_hard_via_wrapper, "./runner git reset --hard", true, Block);
decision_test!(block_reset_hard_via_wrapper_absent, "./runner git reset --hard", false, Block);

// ── ALLOW: other resets ──

decision_test!(allow_reset_soft, "git reset --soft HEAD~1", false, Allow);
decision_test!(allow_reset_file, "git reset HEAD src/main.rs", false, Allow);
decision_test!(allow_reset_hardware, "git reset --hardware", false, Allow);

// ── ALLOW: git without a wrapper ──

decision_test!(allow_git_status_no_wrapper, "git status", false, Allow);
decision_test!(allow_git_push_no_wrapper, "git push origin main", false, Allow);
decision_test!(allow_git_commit_no_wrapper, "git commit -m 'wip'", false, Allow);

// ── BLOCK: direct git once the wrapper exists ──

decision_test!(block_git_status, "git status", true, Block);
decision_test!(block_git_log, "git log --oneline -10", true, Block);
decision_test!(block_git_push, "git push origin main", true, Block);
decision_test!(block_git_chained, "echo x; git status", true, Block);
decision_test!(block_git_after_wrapper_build, "./runner build && git push", true, Block);
decision_test!(block_git_env_prefix, "GIT_PAGER=cat git log", true, Block);

// ── ALLOW: wrapper calls ──

decision_test!(allow_wrapper_status, "./runner git status", true, Allow);
decision_test!(allow_wrapper_log, "./runner git log --oneline", true, Allow);
decision_test!(allow_wrapper_bare_name, "runner git diff", true, Allow);
decision_test!(allow_wrapper_non_git, "./runner test", true, Allow);

// ── ALLOW: no git token ──

decision_test!(allow_ls_wrapper, "ls -la", true, Allow);
decision_test!(allow_ls_no_wrapper, "ls -la", false, Allow);
decision_test!(allow_cargo, "cargo test --all", true, Allow);
decision_test!(allow_which_git, "which git", true, Allow);
decision_test!(allow_legit, "echo legit stuff", true, Allow);
decision_test!(allow_empty, "", true, Allow);
decision_test!(allow_whitespace, "   ", true, Allow);

// ── Diagnostics ──

#[test]
fn reset_diagnostic_echoes_command() {
    let v = verdict_for("git reset --hard HEAD~1", false);
    let text = v.diagnostic().unwrap().to_string();
    assert!(text.starts_with("BLOCKED: "), "{text}");
    assert!(text.contains("git reset --hard"), "{text}");
    assert!(text.contains("Attempted: git reset --hard HEAD~1"), "{text}");
    assert!(text.contains("Only the user"), "{text}");
}

#[test]
fn wrapper_diagnostic_suggests_wrapper() {
    let v = verdict_for("git status", true);
    let text = v.diagnostic().unwrap().to_string();
    assert!(text.contains("Attempted: git status"), "{text}");
    assert!(text.contains("./runner git <subcommand>"), "{text}");
}

#[test]
fn reset_via_wrapper_names_reset_rule() {
    assert_eq!(rule_for("./runner git reset --hard", true), Some("hard-reset"));
    assert_eq!(rule_for("git reset --hard", true), Some("hard-reset"));
    assert_eq!(rule_for("git status", true), Some("wrapper-required"));
}

#[test]
fn same_input_same_verdict() {
    for (cmd, wrapper) in [("git status", true), ("git status", false), ("git reset --hard", false)] {
        let first = verdict_for(cmd, wrapper);
        assert_eq!(verdict_for(cmd, wrapper), first);
        assert_eq!(verdict_for(cmd, wrapper), first);
    }
}

// ── Substring exemption and strict mode ──

#[test]
fn chained_bypass_allowed_by_default() {
    assert_eq!(verdict_for("./runner git status; git push", true), Verdict::Allow);
}

#[test]
fn strict_blocks_chained_bypass() {
    assert!(strict_verdict_for("./runner git status; git push", true).is_block());
    assert!(strict_verdict_for("./runner git fetch && /usr/bin/git merge", true).is_block());
}

#[test]
fn strict_allows_wrapper_only_chains() {
    assert_eq!(
        strict_verdict_for("./runner git add -A && ./runner git commit -m 'fix git bug'", true),
        Verdict::Allow
    );
}

#[test]
fn strict_blocks_nested_git() {
    for cmd in ["(git push)", "echo $(git push)", "echo `git push`", "git status"] {
        assert!(verdict_for(cmd, true).is_block(), "default: {cmd}");
        assert!(strict_verdict_for(cmd, true).is_block(), "strict: {cmd}");
    }
}

#[test]
fn strict_allows_git_mentions() {
    for cmd in ["which git", "echo git"] {
        assert_eq!(verdict_for(cmd, true), Verdict::Allow, "default: {cmd}");
        assert_eq!(strict_verdict_for(cmd, true), Verdict::Allow, "strict: {cmd}");
    }
}

#[test]
fn entry_point_without_file_name_is_config_error() {
    let mut config = Config::default_config();
    config.wrapper.entry_point = ".".into();
    assert!(matches!(
        PolicyEvaluator::from_config(&config),
        Err(gitgate::error::GateError::Config(_))
    ));
}

#[test]
fn strict_still_blocks_hard_reset() {
    assert!(strict_verdict_for("./runner git reset --hard", true).is_block());
    assert!(strict_verdict_for("git reset --hard", false).is_block());
}

#[test]
fn strict_inactive_without_wrapper() {
    assert_eq!(strict_verdict_for("git push; git status", false), Verdict::Allow);
}

// ── Envelope handling ──

fn run_envelope(input: &str, wrapper: bool) -> Verdict {
    let evaluator = PolicyEvaluator::from_config(&Config::default_config()).unwrap();
    let probe = move || wrapper;
    gitgate::hook::run(input.as_bytes(), &evaluator, &probe)
}

#[test]
fn envelope_invalid_json_allows() {
    assert_eq!(run_envelope("{", true), Verdict::Allow);
}

#[test]
fn envelope_empty_input_allows() {
    assert_eq!(run_envelope("", true), Verdict::Allow);
}

#[test]
fn envelope_wrong_shape_allows() {
    assert_eq!(run_envelope(r#"{"tool_input":"git status"}"#, true), Verdict::Allow);
    assert_eq!(run_envelope(r#"{"tool_input":{"command":["git","status"]}}"#, true), Verdict::Allow);
}

#[test]
fn envelope_extra_fields_ignored() {
    let input = r#"{"session_id":"abc","tool_name":"Bash","tool_input":{"command":"git status","timeout":5}}"#;
    assert!(run_envelope(input, true).is_block());
    assert_eq!(run_envelope(input, false), Verdict::Allow);
}
