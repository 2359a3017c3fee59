/*!
Bounded retries.

Both the [clause builder](crate::procedures::clause) and the [formula assembler](crate::procedures::formula) repeat a randomized attempt until it succeeds, or until a budget of attempts is spent.
In the latter case the last attempt is kept, and the caller decides what a failed result means.

```rust
# use mcnf_gen::generic::retry::{retry_with_budget, Attempt};
let mut count = 0;
let retried = retry_with_budget(10, || {
    count += 1;
    match count {
        4 => Attempt::Success(count),
        _ => Attempt::Failure(count),
    }
});

assert!(retried.succeeded);
assert_eq!(retried.attempts, 4);
assert_eq!(retried.value, Some(4));
```
*/

/// The result of a single attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt<T> {
    /// The attempt produced an acceptable value, and no further attempts are made.
    Success(T),

    /// The attempt produced some value, though not an acceptable one.
    Failure(T),
}

/// The outcome of [retry_with_budget].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Retried<T> {
    /// The value of the last attempt made, if any attempt was made.
    pub value: Option<T>,

    /// Whether the last attempt was a success.
    pub succeeded: bool,

    /// The number of attempts made.
    pub attempts: usize,
}

/// Calls `attempt` until it returns a [Success](Attempt::Success) or `budget` attempts have been made.
///
/// A budget of zero makes no attempts.
pub fn retry_with_budget<T>(budget: usize, mut attempt: impl FnMut() -> Attempt<T>) -> Retried<T> {
    let mut retried = Retried {
        value: None,
        succeeded: false,
        attempts: 0,
    };

    while retried.attempts < budget {
        retried.attempts += 1;
        match attempt() {
            Attempt::Success(value) => {
                retried.value = Some(value);
                retried.succeeded = true;
                break;
            }
            Attempt::Failure(value) => retried.value = Some(value),
        }
    }

    retried
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_success_stops() {
        let mut calls = 0;
        let retried = retry_with_budget(100, || {
            calls += 1;
            Attempt::Success(calls)
        });
        assert_eq!(calls, 1);
        assert_eq!(retried.value, Some(1));
        assert!(retried.succeeded);
    }

    #[test]
    fn exhausted_keeps_last() {
        let mut calls = 0;
        let retried = retry_with_budget(7, || {
            calls += 1;
            Attempt::Failure(calls * 10)
        });
        assert_eq!(retried.attempts, 7);
        assert_eq!(retried.value, Some(70));
        assert!(!retried.succeeded);
    }

    #[test]
    fn zero_budget() {
        let retried: Retried<()> = retry_with_budget(0, || panic!("no attempt expected"));
        assert_eq!(retried.attempts, 0);
        assert_eq!(retried.value, None);
        assert!(!retried.succeeded);
    }
}
