use log::error;
use std::fs::File;
use std::io::Result;
use std::path::Path;

pub fn open_read_handler(input_path: &Path) -> Result<File> {
    match File::open(input_path) {
        Ok(file) => Ok(file),
        Err(err) => {
            error!("cannot open file for reading: {:?}, error: {}", input_path, err);
            Err(err)
        }
    }
}

pub fn open_write_handler(output_path: &Path) -> Result<File> {
    match File::create(output_path) {
        Ok(file) => Ok(file),
        Err(err) => {
            error!("cannot open file for writing: {:?}, error: {}", output_path, err);
            Err(err)
        }
    }
}
