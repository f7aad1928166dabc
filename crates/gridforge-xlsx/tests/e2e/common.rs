//! Common utilities for E2E tests.

use std::io::Read;
use std::path::Path;

use gridforge_core::Workbook;
use gridforge_xlsx::XlsxWriter;

/// Write a workbook into a temp directory and return the archive bytes.
pub fn write_to_bytes(workbook: &mut Workbook) -> Vec<u8> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.xlsx");
    XlsxWriter::write_file(workbook, &path).expect("write workbook");
    std::fs::read(&path).expect("read archive back")
}

/// Extract one part of an archive as a string.
pub fn part(bytes: &[u8], name: &str) -> String {
    let cursor = std::io::Cursor::new(bytes.to_vec());
    let mut archive = zip::ZipArchive::new(cursor).expect("open archive");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("part {} missing", name));
    let mut content = String::new();
    file.read_to_string(&mut content).expect("read part");
    content
}

/// Names of every part in the archive, in order.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let cursor = std::io::Cursor::new(bytes.to_vec());
    let archive = zip::ZipArchive::new(cursor).expect("open archive");
    archive.file_names().map(String::from).collect()
}

/// True if the archive contains a part with this exact name.
pub fn has_part(bytes: &[u8], name: &str) -> bool {
    part_names(bytes).iter().any(|n| n == name)
}

#[allow(dead_code)]
pub fn dump_to(bytes: &[u8], path: &Path) {
    std::fs::write(path, bytes).expect("dump archive");
}
