/*!
Parallel generation of formulas.

Each task of a batch is given its own seed, and builds a single formula with its own [Generator].
Tasks are shared among a fixed number of worker threads.
No source of randomness is shared, and so the formula of a task depends only on the config and the seed of the task, regardless of how threads are scheduled.

Formulas are returned in the order of the seeds.

```rust
# use mcnf_gen::batch::generate_parallel;
# use mcnf_gen::config::Config;
# use mcnf_gen::generic::random::derive_seeds;
let seeds = derive_seeds(5, 4);
let once = generate_parallel(&Config::default(), &seeds).unwrap();
let again = generate_parallel(&Config::default(), &seeds).unwrap();

assert_eq!(once.len(), 4);
assert_eq!(once, again);
```

The formulas of a batch differ from those of a sequential run with the same base seed, as a sequential run threads one source through every formula.
*/

use std::num::NonZeroUsize;

use crossbeam::channel::unbounded;

use crate::{
    config::Config, generator::Generator, misc::log::targets, structures::formula::Formula,
    types::err::ConfigurationError,
};

/// Generates one formula for each seed, concurrently, with as many workers as the system offers.
pub fn generate_parallel(config: &Config, seeds: &[u64]) -> Result<Vec<Formula>, ConfigurationError> {
    let workers = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    generate_parallel_with_workers(config, seeds, workers)
}

/// Generates one formula for each seed, with at most `workers` threads.
///
/// The config is validated once, before any thread is spawned.
/// Workers take tasks from a shared queue, and so the number of threads does not grow with the number of seeds.
pub fn generate_parallel_with_workers(
    config: &Config,
    seeds: &[u64],
    workers: usize,
) -> Result<Vec<Formula>, ConfigurationError> {
    let parameters = config.validate()?;

    let (task_tx, task_rx) = unbounded::<(usize, u64)>();
    for task in seeds.iter().copied().enumerate() {
        // The receiver is held here.
        let _ = task_tx.send(task);
    }
    drop(task_tx);

    let (tx, rx) = unbounded::<(usize, Formula)>();
    let workers = workers.min(seeds.len()).max(1);
    log::debug!(target: targets::BATCH, "{} tasks over {workers} workers", seeds.len());

    let scoped = crossbeam::scope(|scope| {
        for worker in 0..workers {
            let task_rx = task_rx.clone();
            let tx = tx.clone();
            scope.spawn(move |_| {
                for (task, seed) in task_rx.iter() {
                    let mut generator = Generator::from_validated_seed(config.clone(), parameters, seed);
                    let formula = generator.generate_formula();
                    log::trace!(target: targets::BATCH, "Task {task} complete on worker {worker}");
                    // The receiver outlives the scope.
                    let _ = tx.send((task, formula));
                }
            });
        }
    });

    if let Err(panic) = scoped {
        std::panic::resume_unwind(panic);
    }
    drop(tx);

    let mut formulas: Vec<Option<Formula>> = vec![None; seeds.len()];
    for (task, formula) in rx.iter() {
        formulas[task] = Some(formula);
    }

    log::info!(target: targets::BATCH, "Batch of {} formulas complete", seeds.len());

    Ok(formulas.into_iter().flatten().collect())
}
