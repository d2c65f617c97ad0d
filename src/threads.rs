use std::iter::zip;
use std::sync::mpsc;
use std::thread;

use log::debug;

use crate::error::RenderError;

pub trait Split: Sized + Clone {
    fn split_parts(&self, n: usize) -> Vec<Self>;

    fn join_parts(&self, parts: &[Self]) -> Self;

    fn parts(&self, n: usize) -> Vec<SplitPart<Self>> {
        self.split_parts(n)
            .into_iter()
            .enumerate()
            .map(|(n, part)| SplitPart::new(part, n))
            .collect()
    }
}

impl<T> Split for Vec<T>
where
    T: Clone,
{
    fn split_parts(&self, n: usize) -> Vec<Self> {
        let size = self.len() / n;
        let size_xtra = self.len() % n;

        let mut start = 0;
        let mut parts: Vec<Vec<T>> = Vec::with_capacity(n);
        for i in 0..n {
            let end = start + size + usize::from(i < size_xtra);
            parts.push(self[start..end].to_vec());
            start = end;
        }
        parts
    }

    fn join_parts(&self, parts: &[Self]) -> Self {
        let mut v: Vec<T> = self.clone();
        for p in parts {
            v.extend_from_slice(p);
        }
        v
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinError;

#[derive(Debug)]
pub struct SplitPart<T: Split> {
    pub n: usize,
    pub part: T,
}

impl<T> SplitPart<T>
where
    T: Split,
{
    pub fn new(part: T, n: usize) -> Self {
        Self { part, n }
    }

    /// Reassembles parts in index order, whatever order they arrived in.
    pub fn join(splits: Vec<SplitPart<T>>) -> Result<T, JoinError> {
        let n = splits.len();
        if n == 0 {
            return Err(JoinError);
        }
        let mut parts: Vec<Option<T>> = vec![None; n];
        for s in splits {
            if s.n >= n || parts[s.n].is_some() {
                return Err(JoinError);
            }
            parts[s.n] = Some(s.part);
        }
        // n distinct indices below n fill every slot
        let parts: Vec<T> = parts.into_iter().flatten().collect();
        Ok(parts[0].join_parts(&parts[1..]))
    }
}

pub trait Solver<T> {
    fn solve(&self, state: &T) -> Result<T, RenderError>;
}

pub trait Threaded<T>
where
    T: Split,
{
    fn threaded(&self, n: usize) -> ThreadedSolver<T>;
}

impl<S, T> Threaded<T> for S
where
    T: Split + Send + 'static,
    S: Solver<T> + Send + 'static + Clone,
{
    fn threaded(&self, n: usize) -> ThreadedSolver<T> {
        ThreadedSolver::with_cloned_solvers(n, self)
    }
}

/// Runs on the calling thread for 0 or 1 threads, on a worker pool otherwise.
pub fn make_solver<S, T>(solver: S, threads: usize) -> Box<dyn Solver<T>>
where
    T: Split + Send + 'static,
    S: Solver<T> + Send + 'static + Clone,
{
    if threads <= 1 {
        Box::new(solver)
    } else {
        let pool: ThreadedSolver<T> = solver.threaded(threads);
        Box::new(pool)
    }
}

type Solved<T> = Result<SplitPart<T>, RenderError>;

struct Worker<T>
where
    T: Split,
{
    tx: mpsc::Sender<SplitPart<T>>,
}

impl<T> Worker<T>
where
    T: Split + Send + 'static,
{
    fn new<S>(id: usize, solver: S, sol_tx: mpsc::Sender<Solved<T>>) -> Self
    where
        S: Solver<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<SplitPart<T>>();
        thread::spawn(move || {
            // Exits once the pool drops its sender
            while let Ok(splitted) = rx.recv() {
                debug!("worker {} solving part {}", id, splitted.n);
                let soln = solver
                    .solve(&splitted.part)
                    .map(|part| SplitPart::new(part, splitted.n));
                if sol_tx.send(soln).is_err() {
                    return;
                }
            }
        });

        Self { tx }
    }

    fn send(&self, part: SplitPart<T>) -> Result<(), RenderError> {
        self.tx
            .send(part)
            .map_err(|_| RenderError::WorkerDisconnected)
    }
}

pub struct ThreadedSolver<T>
where
    T: Split,
{
    workers: Vec<Worker<T>>,
    rx: mpsc::Receiver<Solved<T>>,
    tx: mpsc::Sender<Solved<T>>,
}

impl<T> ThreadedSolver<T>
where
    T: Split + Send + 'static,
{
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            workers: vec![],
            rx,
            tx,
        }
    }

    pub fn add_solver<S>(&mut self, solver: S)
    where
        S: Solver<T> + Send + 'static,
    {
        let worker = Worker::new(self.workers.len(), solver, self.tx.clone());
        self.workers.push(worker);
    }

    pub fn with_cloned_solvers<S>(n: usize, solver: &S) -> Self
    where
        S: Solver<T> + Send + 'static + Clone,
    {
        let mut this = Self::new();
        for _ in 0..n {
            this.add_solver(solver.clone());
        }
        this
    }

    pub fn workers(&self) -> usize {
        self.workers.len()
    }
}

impl<T> Default for ThreadedSolver<T>
where
    T: Split + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Solver<T> for ThreadedSolver<T>
where
    T: Split + Send + 'static,
{
    fn solve(&self, state: &T) -> Result<T, RenderError> {
        let sn = self.workers.len();
        if sn == 0 {
            return Err(RenderError::WorkerDisconnected);
        }

        for (worker, part) in zip(&self.workers, state.parts(sn)) {
            worker.send(part)?;
        }
        let mut parts: Vec<SplitPart<T>> = Vec::with_capacity(sn);
        for _ in 0..sn {
            let solved = self
                .rx
                .recv()
                .map_err(|_| RenderError::WorkerDisconnected)?;
            parts.push(solved?);
        }
        Ok(SplitPart::join(parts)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_vec_split(length: usize, n: usize) {
        let v: Vec<usize> = (0..length).collect();
        let vs = v.parts(n);
        assert_eq!(vs.len(), n);
        let vj: Vec<usize> = SplitPart::join(vs).unwrap();
        assert_eq!(v, vj);
    }

    #[test]
    fn test_vec_splits() {
        test_vec_split(1, 1);
        test_vec_split(0, 2);
        test_vec_split(5, 8);
        test_vec_split(8, 5);
        test_vec_split(100, 1);
        test_vec_split(55, 47);
    }

    #[test]
    fn test_split_sizes_differ_by_one() {
        let v: Vec<u8> = vec![0; 10];
        let sizes: Vec<usize> = v.split_parts(4).iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_join_out_of_order() {
        let parts = vec![
            SplitPart::new(vec![3, 4], 1),
            SplitPart::new(vec![5], 2),
            SplitPart::new(vec![1, 2], 0),
        ];
        assert_eq!(SplitPart::join(parts), Ok(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_join_rejects_bad_indices() {
        let empty: Vec<SplitPart<Vec<u8>>> = vec![];
        assert_eq!(SplitPart::join(empty), Err(JoinError));
        let dup = vec![SplitPart::new(vec![1], 0), SplitPart::new(vec![2], 0)];
        assert_eq!(SplitPart::join(dup), Err(JoinError));
        let gap = vec![SplitPart::new(vec![1], 0), SplitPart::new(vec![2], 2)];
        assert_eq!(SplitPart::join(gap), Err(JoinError));
    }

    #[derive(Clone)]
    struct Double;

    impl Solver<Vec<u32>> for Double {
        fn solve(&self, state: &Vec<u32>) -> Result<Vec<u32>, RenderError> {
            Ok(state.iter().map(|x| x * 2).collect())
        }
    }

    #[test]
    fn test_threaded_matches_single() {
        let input: Vec<u32> = (0..1000).collect();
        let single = Double.solve(&input).unwrap();
        for threads in [2, 3, 8] {
            let pool: ThreadedSolver<Vec<u32>> = Double.threaded(threads);
            assert_eq!(pool.workers(), threads);
            assert_eq!(pool.solve(&input).unwrap(), single);
            // the pool is reusable
            assert_eq!(pool.solve(&input).unwrap(), single);
        }
        assert_eq!(make_solver::<_, Vec<u32>>(Double, 0).solve(&input).unwrap(), single);
        assert_eq!(make_solver::<_, Vec<u32>>(Double, 4).solve(&input).unwrap(), single);
    }

    #[test]
    fn test_empty_pool_fails() {
        let pool: ThreadedSolver<Vec<u32>> = ThreadedSolver::new();
        assert!(pool.solve(&vec![1]).is_err());
    }
}
