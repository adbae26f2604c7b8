//! Failure contracts (FAIL-001 through FAIL-003)

use crate::common::*;

/// CONTRACT FAIL-001: any resolution error yields no partial output
mod all_or_nothing {
    use super::*;

    #[test]
    fn contract_error_in_one_domain_suppresses_others() {
        let env = TestEnv::builder()
            .with_file("client/ok.js", EMPTY_JS)
            .with_file("shared/ok.js", EMPTY_JS)
            .with_file("server/broken.js", &js_requiring(&["./nowhere"]))
            .build();

        for args in [&["tree"][..], &["--json", "tree"][..]] {
            let result = env.run(args);
            assert!(!result.success, "{args:?} unexpectedly succeeded");
            assert!(
                result.stdout.is_empty(),
                "{args:?} printed partial output:\n{}",
                result.stdout
            );
        }
    }
}

/// CONTRACT FAIL-002: cycles terminate with an error instead of recursing
mod cycles_terminate {
    use super::*;

    #[test]
    fn contract_long_cycle_is_detected() {
        let mut builder = TestEnv::builder();
        let count = 20;
        for i in 0..count {
            let next = format!("./f{}", (i + 1) % count);
            builder = builder.with_file(&format!("shared/f{i}.js"), &js_requiring(&[&next]));
        }
        let env = builder.build();

        let result = env.run(&["tree"]);

        assert!(!result.success);
        assert_output_contains!(result, "dependency cycle detected");
    }
}

/// CONTRACT FAIL-003: header content only ends directive scanning, it never
/// fails the run (only missing, invalid, cross-domain and cyclic requires do)
mod header_content {
    use super::*;

    #[test]
    fn contract_non_utf8_header_is_not_an_error() {
        let env = TestEnv::builder()
            .with_file("shared/app.js", &js_requiring(&["./util"]))
            .with_file("shared/util.js", EMPTY_JS)
            .build();
        std::fs::write(
            env.project_path("shared/legacy.js"),
            b"// \xa9 2012 Acme\nvar x;\n",
        )
        .unwrap();

        let result = env.run(&["tree"]);

        assert!(result.success, "tree failed: {}", result.stderr);
        assert_order!(
            env,
            result,
            "shared",
            ["shared/util.js", "shared/app.js", "shared/legacy.js"]
        );
    }
}
