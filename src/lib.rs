mod error;
mod seq_list;

pub use error::{Result, SeqListError};
pub use seq_list::{SeqList, Sequence};

#[cfg(test)]
const SOME_ELEMS: usize = 10;
const MANY_ELEMS: usize = 1_000;
#[cfg(test)]
const NUM_THREADS: usize = 4;
#[cfg(test)]
const ELEMS_PER_THREAD: usize = MANY_ELEMS / NUM_THREADS;

/// Appends `MANY_ELEMS` values and reads each one back by index.
///
/// Returns the sum of what was read.
pub fn seq_test() -> Result<usize> {
    let mut list: SeqList<usize> = SeqList::new();

    for elem in 0..MANY_ELEMS {
        list.add(elem)?;
    }

    let mut sum = 0;
    for index in 0..list.len() {
        sum += *list.get(index)?;
    }
    Ok(sum)
}
