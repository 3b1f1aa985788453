//! Submit gate for forms that require client-side validation.

/// What to do with a submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    /// Cancel the submission and stop it propagating.
    Block,
}

impl SubmitDecision {
    pub fn blocks(self) -> bool {
        self == SubmitDecision::Block
    }
}

/// Decides every submit attempt from the form's constraint check.
pub struct SubmitGate;

impl SubmitGate {
    pub fn decide(is_valid: bool) -> SubmitDecision {
        if is_valid {
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Block
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_form_is_blocked() {
        assert!(SubmitGate::decide(false).blocks());
    }

    #[test]
    fn test_valid_form_proceeds() {
        assert_eq!(SubmitGate::decide(true), SubmitDecision::Proceed);
        assert!(!SubmitGate::decide(true).blocks());
    }

    #[test]
    fn test_gate_is_not_one_shot() {
        let attempts = [false, false, true, false];
        let blocked: Vec<bool> = attempts
            .iter()
            .map(|v| SubmitGate::decide(*v).blocks())
            .collect();
        assert_eq!(blocked, vec![true, true, false, true]);
    }
}
