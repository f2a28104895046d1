use dirzip::archive::compress_dir;
use dirzip::config::OutputSpec;
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::tempdir;

fn entry_names(zip_path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(fs::File::open(zip_path).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

fn read_entry(zip_path: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(fs::File::open(zip_path).unwrap()).unwrap();
    let mut buf = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut buf).unwrap();
    buf
}

#[test]
fn test_entries_are_relative_to_the_archived_root() {
    let workspace = tempdir().unwrap();
    let root = workspace.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("sub").join("b.txt"), "beta").unwrap();

    let out = tempdir().unwrap();
    let zip_path = compress_dir(&root, &OutputSpec::Dir(out.path().to_path_buf())).unwrap();

    assert_eq!(entry_names(&zip_path), vec!["a.txt", "sub/b.txt"]);
}

#[test]
fn test_empty_directory_yields_zero_entry_archive() {
    let workspace = tempdir().unwrap();
    let root = workspace.path().join("empty");
    fs::create_dir(&root).unwrap();

    let out = tempdir().unwrap();
    let zip_path = compress_dir(&root, &OutputSpec::Dir(out.path().to_path_buf())).unwrap();

    assert!(zip_path.exists());
    assert!(entry_names(&zip_path).is_empty());
}

#[test]
fn test_tree_of_empty_directories_yields_zero_entries() {
    let workspace = tempdir().unwrap();
    let root = workspace.path().join("hollow");
    fs::create_dir_all(root.join("a").join("b").join("c")).unwrap();

    let out = tempdir().unwrap();
    let zip_path = compress_dir(&root, &OutputSpec::Dir(out.path().to_path_buf())).unwrap();

    assert!(entry_names(&zip_path).is_empty());
}

#[test]
fn test_round_trip_preserves_bytes() {
    let workspace = tempdir().unwrap();
    let root = workspace.path().join("payload");
    fs::create_dir(&root).unwrap();

    // Patterned binary content large enough to span several copy buffers
    let blob: Vec<u8> = (0..80_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(root.join("blob.bin"), &blob).unwrap();
    fs::write(root.join("note.txt"), "line one\nline two\n").unwrap();
    fs::write(root.join("empty.dat"), "").unwrap();

    let out = tempdir().unwrap();
    let zip_path = compress_dir(&root, &OutputSpec::Dir(out.path().to_path_buf())).unwrap();

    assert_eq!(read_entry(&zip_path, "blob.bin"), blob);
    assert_eq!(read_entry(&zip_path, "note.txt"), b"line one\nline two\n");
    assert_eq!(read_entry(&zip_path, "empty.dat"), Vec::<u8>::new());
}

#[test]
fn test_deeply_nested_files_keep_their_full_relative_path() {
    let workspace = tempdir().unwrap();
    let root = workspace.path().join("deep");
    fs::create_dir_all(root.join("one").join("two").join("three")).unwrap();
    fs::write(
        root.join("one").join("two").join("three").join("leaf.txt"),
        "leaf",
    )
    .unwrap();

    let out = tempdir().unwrap();
    let zip_path = compress_dir(&root, &OutputSpec::Dir(out.path().to_path_buf())).unwrap();

    assert_eq!(entry_names(&zip_path), vec!["one/two/three/leaf.txt"]);
}

#[test]
fn test_beside_source_places_archive_in_the_parent() {
    let workspace = tempdir().unwrap();
    let photos = workspace.path().join("photos");
    fs::create_dir(&photos).unwrap();
    fs::write(photos.join("a.raw"), "raw").unwrap();

    let zip_path = compress_dir(&photos, &OutputSpec::BesideSource).unwrap();

    assert_eq!(zip_path.file_name().unwrap(), "photos.zip");
    assert!(workspace.path().join("photos.zip").exists());
    assert!(!photos.join("photos.zip").exists());
}

#[test]
fn test_missing_source_is_an_error() {
    let workspace = tempdir().unwrap();
    let gone = workspace.path().join("gone");

    let out = tempdir().unwrap();
    let result = compress_dir(&gone, &OutputSpec::Dir(out.path().to_path_buf()));

    assert!(result.is_err());
}

#[test]
fn test_unwritable_output_dir_is_an_error() {
    let workspace = tempdir().unwrap();
    let root = workspace.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();

    let missing_out = workspace.path().join("no-such-output-dir");
    let result = compress_dir(&root, &OutputSpec::Dir(missing_out));

    assert!(result.is_err());
}
