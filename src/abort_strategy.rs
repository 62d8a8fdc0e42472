/// Enum with possible abort strategies.
/// These strategies specify when a running calculation is stopped before its assignment reached a fixpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortStrategy {
	/// Never abort. The calculation runs until an iteration leaves the assignment unchanged.
	/// On pathological inputs (an assignment cycle) this does not terminate.
	Fixpoint,
	/// Abort after **max_iter** iterations, if the assignment did not reach a fixpoint until then.
	/// The result is then reported with [`crate::Status::IterationLimit`].
	/// ## Fields:
	/// - **max_iter**: Maximum amount of update/assign iterations (has to be at least 1)
	MaxIterations { max_iter: usize }
}
impl AbortStrategy {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic> {
		match *self {
			AbortStrategy::Fixpoint => Box::new(FixpointLogic),
			AbortStrategy::MaxIterations { max_iter } => Box::new(MaxIterationsLogic { max_iter })
		}
	}
}
impl Default for AbortStrategy {
	fn default() -> Self { AbortStrategy::Fixpoint }
}

pub(crate) trait AbortStrategyLogic {
	/// Function that has to be called once an iteration ended without reaching a fixpoint.
	/// ## Arguments
	/// - **iteration**: Number of the iteration that just ended (starting at 1)
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation should abort
	fn next(&mut self, iteration: usize) -> bool;
}


pub(crate) struct FixpointLogic;
impl AbortStrategyLogic for FixpointLogic {
	fn next(&mut self, _: usize) -> bool { true }
}


pub(crate) struct MaxIterationsLogic {
	max_iter: usize
}
impl AbortStrategyLogic for MaxIterationsLogic {
	fn next(&mut self, iteration: usize) -> bool {
		iteration < self.max_iter
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixpoint() {
		let mut abort_strategy = AbortStrategy::Fixpoint.create_logic();
		for i in 1..10_000 {
			assert_eq!(abort_strategy.next(i), true);
		}
	}

	#[test]
	fn test_max_iterations() {
		{
			let mut abort_strategy = AbortStrategy::MaxIterations { max_iter: 1 }.create_logic();
			assert_eq!(abort_strategy.next(1), false);
		}
		{
			let mut abort_strategy = AbortStrategy::MaxIterations { max_iter: 3 }.create_logic();
			assert_eq!(abort_strategy.next(1), true);
			assert_eq!(abort_strategy.next(2), true);
			assert_eq!(abort_strategy.next(3), false);
		}
	}

	#[test]
	fn default_is_unbounded() {
		assert_eq!(AbortStrategy::default(), AbortStrategy::Fixpoint);
	}
}
