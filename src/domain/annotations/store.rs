use super::entities::Trendline;
use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::logging::{LogComponent, get_logger};

/// Storage collaborator mirroring the full collection on every mutation.
pub trait AnnotationRepository {
    fn load(&self) -> Vec<Trendline>;
    fn persist(&self, lines: &[Trendline]);
}

/// Repository that keeps nothing. Used before storage is wired up.
pub struct NullRepository;

impl AnnotationRepository for NullRepository {
    fn load(&self) -> Vec<Trendline> {
        Vec::new()
    }
    fn persist(&self, _lines: &[Trendline]) {}
}

/// Id source injected so the store stays clock-free. The production source
/// is wall-clock milliseconds with a monotonic bump on collision.
pub type IdSource = Box<dyn Fn() -> u64>;

/// In-memory collection of trendlines, write-through persisted.
///
/// Insertion order is preserved; every mutating operation serializes the
/// whole collection to the repository before returning.
pub struct TrendlineStore {
    lines: Vec<Trendline>,
    repo: Box<dyn AnnotationRepository>,
    next_id: IdSource,
}

impl TrendlineStore {
    pub fn new(repo: Box<dyn AnnotationRepository>, next_id: IdSource) -> Self {
        let lines = repo.load();
        Self { lines, repo, next_id }
    }

    /// Append a trendline, assigning a unique id when unset or colliding.
    /// Returns the id the line ended up with.
    pub fn add(&mut self, mut line: Trendline) -> u64 {
        if line.id == 0 || self.lines.iter().any(|l| l.id == line.id) {
            line.id = self.fresh_id();
        }
        let id = line.id;
        self.lines.push(line);
        self.repo.persist(&self.lines);
        get_logger()
            .debug(LogComponent::Domain("TrendlineStore"), &format!("added trendline {}", id));
        id
    }

    /// Replace the record whose id matches. The store is untouched on a miss.
    pub fn update(&mut self, line: Trendline) -> ChartResult<()> {
        match self.lines.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => {
                *existing = line;
                self.repo.persist(&self.lines);
                Ok(())
            }
            None => {
                get_logger().warn(
                    LogComponent::Domain("TrendlineStore"),
                    &format!("update for unknown trendline {}", line.id),
                );
                Err(ChartError::NotFound(line.id))
            }
        }
    }

    /// Delete by id. Idempotent: removing an unknown id is not an error.
    pub fn remove(&mut self, id: u64) {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() != before {
            self.repo.persist(&self.lines);
        }
    }

    /// Current trendlines in insertion order.
    pub fn list(&self) -> &[Trendline] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Trendline> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// The line closest to `(x, y)` within `threshold` pixels.
    /// Ties resolve to the nearest distance, not insertion order.
    pub fn hit_test(&self, x: f64, y: f64, threshold: f64) -> Option<&Trendline> {
        self.lines
            .iter()
            .map(|line| (line, line.distance_to(x, y)))
            .filter(|(_, d)| *d < threshold)
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(line, _)| line)
    }

    fn fresh_id(&self) -> u64 {
        let candidate = (self.next_id)();
        let max_existing = self.lines.iter().map(|l| l.id).max().unwrap_or(0);
        candidate.max(max_existing + 1)
    }
}
