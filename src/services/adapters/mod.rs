mod catalog_file;

pub use catalog_file::CatalogFile;
