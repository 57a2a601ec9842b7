//! Build snapshot fixtures.
//!
//! `outputPath` is relative so the snapshot resolves against its own
//! directory; snapshots live in the project root next to `dist/`.

/// Single entry point with one sourced asset and one auxiliary file
pub const SIMPLE_SNAPSHOT: &str = r#"{
  "outputPath": "dist",
  "entrypoints": [
    { "name": "main", "chunks": [ { "files": ["main.js", "main.css"] } ] }
  ],
  "assetsInfo": {
    "main.js": { "sourceFilename": "src/index.js" },
    "main.css": {}
  }
}"#;

/// `app` depends on `vendor`
pub const DEPENDENT_SNAPSHOT: &str = r#"{
  "outputPath": "dist",
  "entrypoints": [
    { "name": "vendor", "chunks": [ { "files": ["vendor.js"] } ] },
    { "name": "app", "dependOn": ["vendor"], "chunks": [ { "files": ["app.js"] } ] }
  ],
  "assetsInfo": {
    "vendor.js": { "sourceFilename": "node_modules/lib/index.js" },
    "app.js": { "sourceFilename": "src/app.js" },
    "img/logo.png": { "sourceFilename": "src/logo.png" }
  }
}"#;

/// `app` depends on an entry point that does not exist
pub const UNKNOWN_DEPENDENCY_SNAPSHOT: &str = r#"{
  "outputPath": "dist",
  "entrypoints": [
    { "name": "app", "dependOn": ["missing"], "chunks": [ { "files": ["app.js"] } ] }
  ]
}"#;

/// No `outputPath`: files live next to the snapshot
pub const NO_OUTPUT_PATH_SNAPSHOT: &str = r#"{
  "entrypoints": [
    { "name": "main", "chunks": [ { "files": ["main.js"] } ] }
  ]
}"#;
