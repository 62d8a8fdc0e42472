pub(crate) mod testing {
	use std::collections::HashMap;

	/// Assert that two assignments describe the same partition, i.e. they only differ by a
	/// renaming of their labels.
	pub fn assert_same_partition(should: &[usize], actual: &[usize]) {
		assert_eq!(should.len(), actual.len(), "assignments differ in length");
		let mut idmap = HashMap::new();
		let mut idrevmap = HashMap::new();
		for idx in 0..should.len() {
			let (should_id, actual_id) = (should[idx], actual[idx]);
			let mapped = *idmap.entry(should_id).or_insert(actual_id);
			let rev_mapped = *idrevmap.entry(actual_id).or_insert(should_id);
			if mapped != actual_id || rev_mapped != should_id {
				panic!(
					"Cluster assignments different at idx {}.\nMapping(should -> actual): {:?}\nActual: {:?}\nShould: {:?}",
					idx, idmap, actual, should
				);
			}
		}
	}
}



#[cfg(test)]
mod tests {
	use super::testing::assert_same_partition;

	#[test]
	fn same_partition_up_to_renaming() {
		assert_same_partition(&[0, 0, 1, 2], &[2, 2, 0, 1]);
		assert_same_partition(&[], &[]);
	}

	#[test]
	#[should_panic]
	fn split_group_is_detected() {
		assert_same_partition(&[0, 0, 1], &[0, 1, 1]);
	}

	#[test]
	#[should_panic]
	fn merged_groups_are_detected() {
		assert_same_partition(&[0, 1, 2], &[0, 1, 1]);
	}
}
