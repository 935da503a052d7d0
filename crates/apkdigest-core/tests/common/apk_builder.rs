//! Minimal APK-shaped zip archives for tests.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Manifest as written by the Android signer for a small app.
pub const SIGNED_MANIFEST: &str = "Manifest-Version: 1.0\r\n\
Built-By: Generated-by-ADT\r\n\
Created-By: Android Gradle 1.1.0\r\n\
\r\n\
Name: res/layout/activity_main.xml\r\n\
SHA1-Digest: 3hbWw5xtcpiaYk6Ri0dsyrHXn3w=\r\n\
\r\n\
Name: AndroidManifest.xml\r\n\
SHA1-Digest: 0GkVU0NW6NCqbLDVHzyMuIvs6Bw=\r\n\
\r\n\
Name: classes.dex\r\n\
SHA1-Digest: hMhV0DZr4tQQc3iuJgdoFBaDZbo=\r\n\
\r\n\
Name: resources.arsc\r\n\
SHA1-Digest: 2jmj7l5rSw0yVb/vlWAYkK/YBwk=\r\n\
\r\n";

pub const SIGNED_DEX_DIGEST: &str = "hMhV0DZr4tQQc3iuJgdoFBaDZbo=";

/// Write an archive at `path` holding the given members.
pub fn write_apk(path: &Path, members: &[(&str, &[u8])]) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in members {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();
    fs::write(path, bytes).unwrap();
}

/// Write a signed-looking APK with the standard manifest.
pub fn write_signed_apk(path: &Path) {
    write_apk(
        path,
        &[
            ("AndroidManifest.xml", &b"\x03\x00\x08\x00"[..]),
            ("classes.dex", &b"dex\n035\0"[..]),
            ("META-INF/MANIFEST.MF", SIGNED_MANIFEST.as_bytes()),
            ("META-INF/CERT.SF", &b"Signature-Version: 1.0\r\n"[..]),
        ],
    );
}
