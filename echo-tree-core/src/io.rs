use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a whole text file into a `String`.
///
/// - Fails if the path does not exist or is a directory
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let path = filename.as_ref();
	if path.is_dir() {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("Expected a file, got directory: {}", path.display()),
		));
	}

	let mut contents = String::new();
	File::open(path)?.read_to_string(&mut contents)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_directories() {
		let err = read_file(std::env::temp_dir()).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
	}

	#[test]
	fn missing_file_is_not_found() {
		let err = read_file("./definitely/not/here.json").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
