//! Executor trait for running independent edition builds.
//!
//! Assembling an edition shares no mutable state with any other edition, so
//! a batch can be fanned out over whatever threading model the host offers.

use std::fmt::Debug;

/// A trait for executing work items, potentially in parallel.
///
/// Results are always returned in input order, whatever order the items
/// were processed in.
///
/// # Implementations
///
/// - [`SyncExecutor`]: Sequential execution, no threading (always available)
/// - `RayonExecutor` (folio-executor): Work-stealing thread pool (feature-gated)
pub trait Executor: Send + Sync + Debug {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Like `execute_all`, for operations that may fail per item.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// 1 for sequential executors, the worker count otherwise.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// A synchronous executor that processes items sequentially.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_executor_processes_items_in_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec![1, 2, 3, 4, 5], |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_sync_executor_handles_fallible_operations() {
        let executor = SyncExecutor::new();
        let results: Vec<Result<i32, &str>> = executor.execute_all_fallible(vec![1, 2, 0, 4], |x| {
            if x == 0 { Err("division by zero") } else { Ok(10 / x) }
        });
        assert_eq!(results.len(), 4);
        assert!(results[2].is_err());
        assert_eq!(results[3], Ok(2));
    }

    #[test]
    fn test_sync_executor_empty_input() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(Vec::<i32>::new(), |x| x * 2);
        assert!(results.is_empty());
    }

    #[test]
    fn test_sync_executor_identity() {
        let executor = SyncExecutor::new();
        assert_eq!(executor.parallelism(), 1);
        assert_eq!(executor.name(), "SyncExecutor");
    }
}
