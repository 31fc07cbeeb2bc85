//! End-to-end packaging against the file system.

use netshrink_bundler::bundler::{
    Bundler, ContentHazard, Error, ModuleSlot, ModuleTree, ROBLOX_MODEL, SettingsBuilder,
    build_package, builder::calculate_sha256, load_module,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/modules")
}

fn fixture_tree() -> ModuleTree {
    let read = |name: &str| fs::read_to_string(fixtures().join(name)).unwrap();
    ModuleTree::new(
        read("NetShrink.lua"),
        read("Compression.lua"),
        read("Decode.lua"),
        read("Encode.lua"),
    )
}

/// Source directory with the fixture modules, minus `skip`.
fn source_dir_without(skip: Option<ModuleSlot>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for slot in ModuleSlot::ALL {
        if Some(slot) != skip {
            let name = slot.default_file_name();
            fs::copy(fixtures().join(name), dir.path().join(name)).unwrap();
        }
    }
    dir
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn writes_package_named_after_root() {
    let out = tempfile::tempdir().unwrap();
    let settings = SettingsBuilder::new()
        .root_name("Demo")
        .source_dir(fixtures())
        .output_dir(out.path())
        .build();
    let output_path = settings.output_path();

    let artifact = Bundler::new(settings).bundle().await.unwrap();

    assert_eq!(artifact.path, output_path);
    assert!(artifact.hazards.is_empty());
    let expected = build_package(&ROBLOX_MODEL, &fixture_tree(), Some("Demo")).into_document();
    assert_eq!(artifact.path, out.path().join("Demo.rbxmx"));
    assert_eq!(fs::read_to_string(&artifact.path).unwrap(), expected);
    assert_eq!(artifact.size, expected.len() as u64);
    assert_eq!(artifact.checksum, calculate_sha256(expected.as_bytes()));
    assert_eq!(entries(out.path()), ["Demo.rbxmx"]);
}

#[tokio::test]
async fn default_name_used_for_file_and_model() {
    let out = tempfile::tempdir().unwrap();
    let settings = SettingsBuilder::new()
        .root_name("")
        .source_dir(fixtures())
        .output_dir(out.path())
        .build();

    let artifact = Bundler::new(settings).bundle().await.unwrap();

    assert_eq!(artifact.path, out.path().join("NetShrink.rbxmx"));
    let document = fs::read_to_string(&artifact.path).unwrap();
    assert!(document.contains("<string name=\"Name\">NetShrink</string>"));
}

#[tokio::test]
async fn overwrites_existing_package() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("Demo.rbxmx");
    fs::write(&target, "stale").unwrap();

    let settings = SettingsBuilder::new()
        .root_name("Demo")
        .source_dir(fixtures())
        .output_dir(out.path())
        .build();
    Bundler::new(settings).bundle().await.unwrap();

    let document = fs::read_to_string(&target).unwrap();
    assert!(document.starts_with("<roblox "));
    assert_eq!(entries(out.path()), ["Demo.rbxmx"]);
}

#[tokio::test]
async fn long_name_that_fits_on_disk_is_written() {
    let out = tempfile::tempdir().unwrap();
    let name = "N".repeat(240);
    let settings = SettingsBuilder::new()
        .root_name(name.as_str())
        .output_dir(out.path())
        .build();
    let tree = ModuleTree::new("-- root", "-- a", "-- b", "-- c");

    let artifact = Bundler::new(settings).bundle_tree(&tree).await.unwrap();

    assert_eq!(artifact.path, out.path().join(format!("{name}.rbxmx")));
    assert!(artifact.path.is_file());
    assert_eq!(entries(out.path()), [format!("{name}.rbxmx")]);
}

#[tokio::test]
async fn creates_missing_output_directory() {
    let out = tempfile::tempdir().unwrap();
    let nested = out.path().join("dist/models");

    let settings = SettingsBuilder::new()
        .source_dir(fixtures())
        .output_dir(&nested)
        .build();
    let artifact = Bundler::new(settings).bundle().await.unwrap();

    assert_eq!(artifact.path, nested.join("NetShrink.rbxmx"));
    assert!(artifact.path.is_file());
}

#[tokio::test]
async fn missing_module_aborts_before_writing() {
    let sources = source_dir_without(Some(ModuleSlot::Encode));
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("Demo.rbxmx");
    fs::write(&target, "previous package").unwrap();

    let settings = SettingsBuilder::new()
        .root_name("Demo")
        .source_dir(sources.path())
        .output_dir(out.path())
        .build();
    let err = Bundler::new(settings).bundle().await.unwrap_err();

    match err {
        Error::Read { slot, path, source } => {
            assert_eq!(slot, ModuleSlot::Encode);
            assert_eq!(path, sources.path().join("Encode.lua"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected read error, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&target).unwrap(), "previous package");
    assert_eq!(entries(out.path()), ["Demo.rbxmx"]);
}

#[tokio::test]
async fn missing_root_leaves_no_output() {
    let sources = source_dir_without(Some(ModuleSlot::Root));
    let out = tempfile::tempdir().unwrap();

    let settings = SettingsBuilder::new()
        .source_dir(sources.path())
        .output_dir(out.path())
        .build();
    let err = Bundler::new(settings).bundle().await.unwrap_err();

    assert!(matches!(err, Error::Read { slot: ModuleSlot::Root, .. }));
    assert!(err.to_string().contains("NetShrink.lua"));
    assert!(entries(out.path()).is_empty());
}

#[tokio::test]
async fn module_path_override_wins_over_source_dir() {
    let sources = source_dir_without(Some(ModuleSlot::Compression));
    let elsewhere = tempfile::tempdir().unwrap();
    let custom = elsewhere.path().join("deflate.luau");
    fs::write(&custom, "return 'custom'").unwrap();
    let out = tempfile::tempdir().unwrap();

    let settings = SettingsBuilder::new()
        .source_dir(sources.path())
        .module_path(ModuleSlot::Compression, &custom)
        .output_dir(out.path())
        .build();
    let artifact = Bundler::new(settings).bundle().await.unwrap();

    let document = fs::read_to_string(artifact.path).unwrap();
    assert!(document.contains("<![CDATA[return 'custom']]>"));
}

#[tokio::test]
async fn non_utf8_module_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Decode.lua");
    fs::write(&path, [0x2d, 0x2d, 0xff, 0xfe]).unwrap();

    let err = load_module(ModuleSlot::Decode, &path).await.unwrap_err();

    match err {
        Error::Read { slot, source, .. } => {
            assert_eq!(slot, ModuleSlot::Decode);
            assert_eq!(source.kind(), io::ErrorKind::InvalidData);
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[tokio::test]
async fn load_module_keeps_text_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Encode.lua");
    let text = "-- crlf\r\nlocal x = 1\t-- tab\n\n";
    fs::write(&path, text).unwrap();

    let module = load_module(ModuleSlot::Encode, &path).await.unwrap();

    assert_eq!(module.slot(), ModuleSlot::Encode);
    assert_eq!(module.text(), text);
}

#[tokio::test]
async fn name_with_separator_is_a_write_error() {
    let out = tempfile::tempdir().unwrap();
    let settings = SettingsBuilder::new()
        .root_name("models/Demo")
        .source_dir(fixtures())
        .output_dir(out.path())
        .build();

    let err = Bundler::new(settings).bundle().await.unwrap_err();

    match err {
        Error::Write { source, .. } => assert_eq!(source.kind(), io::ErrorKind::InvalidInput),
        other => panic!("expected write error, got {other:?}"),
    }
    assert!(entries(out.path()).is_empty());
}

#[tokio::test]
async fn unwritable_destination_is_a_write_error() {
    let out = tempfile::tempdir().unwrap();
    let blocker = out.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let settings = SettingsBuilder::new()
        .source_dir(fixtures())
        .output_dir(blocker.join("dist"))
        .build();
    let err = Bundler::new(settings).bundle().await.unwrap_err();

    assert!(matches!(err, Error::Write { .. }), "got {err:?}");
    assert!(err.to_string().contains("NetShrink.rbxmx"));
    assert_eq!(entries(out.path()), ["blocker"]);
}

#[tokio::test]
async fn strict_mode_refuses_terminator() {
    let out = tempfile::tempdir().unwrap();
    let settings = SettingsBuilder::new()
        .output_dir(out.path())
        .strict(true)
        .build();
    let tree = ModuleTree::new("-- root", "-- a", "return t[i[1]]>0", "-- c");

    let err = Bundler::new(settings).bundle_tree(&tree).await.unwrap_err();

    match &err {
        Error::ContentHazard(hazards) => assert_eq!(hazards.len(), 1),
        other => panic!("expected hazard error, got {other:?}"),
    }
    assert!(err.to_string().contains("decode module"));
    assert!(entries(out.path()).is_empty());
}

#[tokio::test]
async fn lenient_mode_writes_hazardous_input_verbatim() {
    let out = tempfile::tempdir().unwrap();
    let settings = SettingsBuilder::new().output_dir(out.path()).build();
    let tree = ModuleTree::new("-- root", "-- a", "return t[i[1]]>0", "-- c");

    let artifact = Bundler::new(settings).bundle_tree(&tree).await.unwrap();

    assert_eq!(
        artifact.hazards,
        [ContentHazard::CdataTerminator {
            slot: ModuleSlot::Decode,
            offset: 12,
        }]
    );
    let document = fs::read_to_string(artifact.path).unwrap();
    assert!(document.contains("<![CDATA[return t[i[1]]>0]]>"));
}
