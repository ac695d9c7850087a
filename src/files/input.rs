use super::{FileFormat, LoadError, LoadResult};
use crate::holiday::Holiday;
use crate::template::TaskTemplate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// `[[holiday]]` tables in TOML, a `"holiday"` array in JSON.
#[derive(Default, Serialize, Deserialize)]
struct HolidayFile {
    #[serde(default, rename = "holiday")]
    holidays: Vec<Holiday>,
}

/// `[[task]]` tables in TOML, a `"task"` array in JSON.
#[derive(Default, Serialize, Deserialize)]
struct TaskFile {
    #[serde(default, rename = "task")]
    tasks: Vec<TaskTemplate>,
}

pub fn load_holidays<P: AsRef<Path>>(path: P) -> LoadResult<Vec<Holiday>> {
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        FileFormat::Csv => read_csv_records(path),
        format => Ok(read_document::<HolidayFile>(path, format)?.holidays),
    }
}

pub fn load_templates<P: AsRef<Path>>(path: P) -> LoadResult<Vec<TaskTemplate>> {
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        FileFormat::Csv => read_csv_records(path),
        format => Ok(read_document::<TaskFile>(path, format)?.tasks),
    }
}

/// Write holiday records back out in the format implied by `path`.
pub fn save_holidays<P: AsRef<Path>>(holidays: &[Holiday], path: P) -> LoadResult<()> {
    let path = path.as_ref();
    let document = HolidayFile {
        holidays: holidays.to_vec(),
    };
    match FileFormat::from_path(path) {
        FileFormat::Toml => {
            let text = toml::to_string(&document).map_err(LoadError::toml_serialize(path))?;
            fs::write(path, text).map_err(LoadError::io(path))?;
        }
        FileFormat::Json => {
            let file = File::create(path).map_err(LoadError::io(path))?;
            serde_json::to_writer_pretty(file, &document).map_err(LoadError::json(path))?;
        }
        FileFormat::Csv => {
            let mut writer = csv::Writer::from_path(path).map_err(LoadError::csv(path))?;
            for holiday in holidays {
                writer.serialize(holiday).map_err(LoadError::csv(path))?;
            }
            writer.flush().map_err(LoadError::io(path))?;
        }
    }
    Ok(())
}

fn read_document<T: DeserializeOwned>(path: &Path, format: FileFormat) -> LoadResult<T> {
    let text = fs::read_to_string(path).map_err(LoadError::io(path))?;
    match format {
        FileFormat::Json => serde_json::from_str(&text).map_err(LoadError::json(path)),
        _ => toml::from_str(&text).map_err(LoadError::toml(path)),
    }
}

fn read_csv_records<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(LoadError::csv(path))?;
    let mut records = Vec::new();
    for record in reader.deserialize::<T>() {
        records.push(record.map_err(LoadError::csv(path))?);
    }
    Ok(records)
}
