#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use loadorder::{Directive, DirectiveSyntax, LocalFs, SourceFile};

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let owner = SourceFile::open(&LocalFs::new(), "/fuzz/app/shared/owner.js");
        let directive = Directive::parse(&owner, line, Path::new("/fuzz/app"));

        if directive.is_valid() {
            assert!(directive.target().is_some());
        }
        let _ = directive.participates(&DirectiveSyntax::default());
    }
});
