use std::path::PathBuf;

pub fn get_history_file_path() -> Option<PathBuf> {
	let proj_dirs = directories::ProjectDirs::from("", "", "exact")?;
	let dir = proj_dirs.data_local_dir();
	std::fs::create_dir_all(dir).ok()?;
	Some(dir.join("history"))
}
