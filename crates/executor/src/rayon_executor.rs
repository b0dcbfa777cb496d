//! Rayon-based parallel executor.

use folio_traits::Executor;
use rayon::prelude::*;

/// A parallel executor using rayon's global work-stealing pool.
///
/// Configure the pool size with `rayon::ThreadPoolBuilder::build_global`
/// before the first executor is created.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        // Indexed parallel iterators collect in input order.
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_rayon_executor_preserves_order() {
        let executor = RayonExecutor::new();
        let results = executor.execute_all(vec![1, 2, 3, 4, 5], |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_rayon_executor_handles_fallible_operations() {
        let executor = RayonExecutor::new();
        let results: Vec<Result<i32, &str>> = executor.execute_all_fallible(vec![1, 2, 0, 4], |x| {
            if x == 0 { Err("division by zero") } else { Ok(10 / x) }
        });
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
        assert!(results[2].is_err());
    }

    #[test]
    fn test_rayon_executor_visits_every_item() {
        let executor = RayonExecutor::new();
        assert!(executor.parallelism() > 0);

        let counter = Arc::new(AtomicUsize::new(0));
        let _ = executor.execute_all((0..100).collect::<Vec<usize>>(), {
            let counter = counter.clone();
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }
}
