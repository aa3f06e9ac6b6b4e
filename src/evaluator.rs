//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::Rules;
use crate::sections::SECTIONS;
use crate::types::ScoreResult;

/// Delay before an async evaluation runs, so keystroke bursts coalesce.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Scores passwords against a set of [`Rules`].
///
/// Stateless apart from its rules: the same password always yields the
/// same result, and one evaluator can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluator {
    rules: Rules,
}

impl Evaluator {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Evaluates every section in order and collects suggestions for the
    /// ones that fail. All sections always run.
    pub fn evaluate(&self, password: &SecretString) -> ScoreResult {
        let suggestions: Vec<String> = SECTIONS
            .iter()
            .filter_map(|(_section_name, section_fn)| {
                let outcome = section_fn(password, &self.rules);
                #[cfg(feature = "tracing")]
                tracing::trace!(section = _section_name, passed = outcome.is_none());
                outcome
            })
            .collect();

        let result = ScoreResult::from_suggestions(suggestions);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score = result.score.value(),
            strength = %result.strength,
            "password evaluated"
        );

        result
    }

    pub fn evaluate_str(&self, password: &str) -> ScoreResult {
        self.evaluate(&SecretString::new(password.to_string().into()))
    }
}

/// Evaluates password strength with the default rules.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `ScoreResult` with score, strength and ordered suggestions.
pub fn evaluate(password: &SecretString) -> ScoreResult {
    Evaluator::default().evaluate(password)
}

/// Same as [`evaluate`], for callers holding a plain string.
pub fn evaluate_str(password: &str) -> ScoreResult {
    Evaluator::default().evaluate_str(password)
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`], then returns without sending if `token` has been
/// cancelled in the meantime (typically because a newer keystroke started
/// another evaluation).
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let result = evaluator.evaluate(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::Strength;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(&Evaluator::default(), &pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(result.strength, Strength::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(&Evaluator::default(), &pwd, token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            let pwd = SecretString::new("TestPass123!".to_string().into());
            evaluate_tx(&Evaluator::default(), &pwd, task_token, tx).await;
        });

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(100)).await;
        // a newer keystroke supersedes this evaluation
        token.cancel();

        assert!(rx.recv().await.is_none());
        handle.await.expect("evaluation task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_waits_for_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("abc".to_string().into());
        let start = tokio::time::Instant::now();

        evaluate_tx(&Evaluator::default(), &pwd, token, tx).await;

        assert!(start.elapsed() >= DEBOUNCE);
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let pwd = SecretString::new("abc".to_string().into());

        // must not panic
        evaluate_tx(&Evaluator::default(), &pwd, CancellationToken::new(), tx).await;
    }
}
