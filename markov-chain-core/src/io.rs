use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use crate::error::ChainError;

/// Reads a whole corpus file and returns it as a single `String`.
///
/// # Errors
/// Returns `ChainError::Io` carrying the path if the file cannot be
/// opened or is not valid UTF-8.
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String, ChainError> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| ChainError::Io { path: path.to_path_buf(), source })?;
	Ok(contents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `data/green-eggs.txt` → `green-eggs`
/// - `corpus` → `corpus`
pub fn get_filename<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let path = path.as_ref();
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted alphabetically.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
