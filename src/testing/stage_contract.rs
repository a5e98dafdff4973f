use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "test123", // Alphanumeric
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string` → empty in, empty out
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        // First pass – respect needs_apply
        if stage.needs_apply(&text) {
            text = stage.apply(text);
            assert!(matches!(text, Cow::Owned(_)), "needs_apply but no allocation on `{input}`");
        } else {
            assert_eq!(input as *const str, text.as_ref() as *const str);
        }

        // Second pass – must never allocate again
        let old_ptr = text.as_ref() as *const str;
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
        assert_eq!(
            old_ptr,
            text.as_ref() as *const str,
            "zero-copy violated on second idempotent pass (stage: {}, input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let text = stage.apply(Cow::Borrowed(pass_through));
        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
            "zero-copy violated on pass-through sample (stage: {}, input: `{pass_through}`)",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let text = stage.apply(Cow::Borrowed(input));
        assert_eq!(text.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(once.clone());
        assert_eq!(once, twice, "apply() not idempotent on `{input}`");
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let samples = S::samples().iter().chain(S::should_pass_through());
    for &sample in samples {
        let predicted = stage.needs_apply(sample);
        // Owned input, so stages that always allocate are not penalised.
        let output = stage.apply(Cow::Owned(sample.to_owned()));
        let actually_changes = output != sample;
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on `{sample}`\n\
             predicted: {predicted}\n\
             actual   : {actually_changes} (output = {output:?})",
            stage.name(),
        );
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    assert!(!stage.needs_apply(""));
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский\u{200F} Türkçe العربية\u{202E} 简体中文 \u{1D173}🏴\u{E0001}",
    ));
}
