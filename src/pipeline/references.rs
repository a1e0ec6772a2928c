use super::Pipeline;
use crate::block::{BlockConfig, BlockType};
use crate::error::ReferenceError;

impl Pipeline {
    /// Lists the weak references held by `Join` and `Condition` blocks that an
    /// executor would fail to resolve.
    ///
    /// Nothing is enforced; blocks may legitimately point at ids that have not
    /// been created yet while a pipeline is being edited. Cycles are not checked.
    pub fn unresolved_references(&self) -> Vec<ReferenceError> {
        let mut problems = Vec::new();
        for block in self {
            match block.config() {
                BlockConfig::Join(join) => {
                    let Some(target_id) = &join.right_source_id else {
                        continue;
                    };
                    match self.get(target_id).map(|target| target.block_type()) {
                        None => problems.push(ReferenceError::MissingJoinSource {
                            join_id: block.id().clone(),
                            target_id: target_id.clone(),
                        }),
                        Some(BlockType::Source) => {}
                        Some(found) => problems.push(ReferenceError::JoinSourceNotSource {
                            join_id: block.id().clone(),
                            target_id: target_id.clone(),
                            found,
                        }),
                    }
                }
                BlockConfig::Condition(_) => {
                    problems.extend(
                        block
                            .referenced_ids()
                            .into_iter()
                            .filter(|target_id| !self.contains(target_id))
                            .map(|target_id| ReferenceError::MissingBranchTarget {
                                condition_id: block.id().clone(),
                                target_id: target_id.clone(),
                            }),
                    );
                }
                _ => {}
            }
        }
        problems
    }
}
