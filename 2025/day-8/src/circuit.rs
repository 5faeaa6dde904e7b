use tracing::{debug, info, trace};

use crate::dsu::Dsu;
use crate::error::CircuitError;
use crate::pairs::{self, Pair};
use crate::parser::Point;

/// When to stop connecting junction boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Process this many of the closest pairs. A pair whose boxes already
    /// share a circuit still uses up one connection.
    Budget(usize),
    /// Keep going until every box is in one circuit.
    FullyConnected,
}

impl Policy {
    pub fn budget(connections: i64) -> Result<Self, CircuitError> {
        usize::try_from(connections)
            .map(Policy::Budget)
            .map_err(|_| CircuitError::MalformedBudget {
                budget: connections,
            })
    }

    /// 10 connections for the small puzzle example, 1000 for real inputs.
    pub fn auto_budget(boxes: usize) -> Self {
        if boxes <= 20 {
            Policy::Budget(10)
        } else {
            Policy::Budget(1000)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sizes of every circuit once the budget ran out.
    Circuits(Vec<usize>),
    /// The pair whose connection merged the last two circuits.
    LastConnection(Pair),
}

impl Outcome {
    /// Product of the three largest circuit sizes, or of all of them if
    /// there are fewer than three.
    pub fn largest_circuits_product(&self) -> Option<usize> {
        match self {
            Outcome::Circuits(sizes) => {
                let mut sizes = sizes.clone();
                sizes.sort_unstable_by(|a, b| b.cmp(a));
                Some(sizes.iter().take(3).product())
            }
            Outcome::LastConnection(_) => None,
        }
    }

    /// Product of the X coordinates of the last two boxes connected.
    ///
    /// Computed in `i128`: two coordinates within [`crate::parser::MAX_COORD`] always fit.
    pub fn last_connection_product(&self, points: &[Point]) -> Option<i128> {
        match self {
            Outcome::LastConnection(pair) => {
                Some(i128::from(points[pair.a].x) * i128::from(points[pair.b].x))
            }
            Outcome::Circuits(_) => None,
        }
    }
}

/// Connects junction boxes closest-first under a [`Policy`].
#[derive(Debug)]
pub struct Playground<'a> {
    points: &'a [Point],
    policy: Policy,
}

impl<'a> Playground<'a> {
    pub fn new(points: &'a [Point], policy: Policy) -> Self {
        Self { points, policy }
    }

    #[tracing::instrument(skip(self), fields(boxes = self.points.len(), policy = ?self.policy))]
    pub fn run(&self) -> Result<Outcome, CircuitError> {
        let pairs = pairs::closest_first(self.points)?;
        let mut dsu = Dsu::new(self.points.len());

        match self.policy {
            Policy::Budget(limit) => {
                let mut merges = 0;
                for pair in pairs.iter().take(limit) {
                    if dsu.union(pair.a, pair.b) {
                        merges += 1;
                        trace!(
                            a = pair.a,
                            b = pair.b,
                            distance = pair.distance(),
                            circuit_size = dsu.size_of(pair.a),
                            "merged"
                        );
                    }
                }
                debug!(
                    attempted = limit.min(pairs.len()),
                    merges,
                    circuits = dsu.num_components(),
                    "connection budget spent"
                );
                Ok(Outcome::Circuits(dsu.component_sizes()))
            }
            Policy::FullyConnected => {
                for pair in &pairs {
                    if !dsu.union(pair.a, pair.b) {
                        continue;
                    }
                    trace!(
                        a = pair.a,
                        b = pair.b,
                        circuit_size = dsu.size_of(pair.a),
                        circuits = dsu.num_components(),
                        "merged"
                    );
                    if dsu.num_components() == 1 {
                        info!(a = pair.a, b = pair.b, distance = pair.distance(), "all boxes connected");
                        return Ok(Outcome::LastConnection(*pair));
                    }
                }
                Err(CircuitError::NonConvergence {
                    remaining: dsu.num_components(),
                })
            }
        }
    }
}
