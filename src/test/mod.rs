pub mod test_util;

#[cfg(test)]
mod test_input;
#[cfg(test)]
mod test_undo;
