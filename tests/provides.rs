//! End-to-end tests: vendoring output in, Provides report out
//!
//! Uses ReaderSource over in-memory output instead of running the Go toolchain.

use std::io::Cursor;

use gomod2rpmdeps::report::{ReportSummary, Reporter, collect};
use gomod2rpmdeps::source::ReaderSource;

/// Run the whole pipeline, returning (report, diagnostics, summary)
fn run(input: &str) -> (String, String, ReportSummary) {
    let mut source = ReaderSource::new(Cursor::new(input.to_string()));
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();

    let mut modules = collect(&mut source, &mut diagnostics).unwrap();
    let summary = Reporter::default()
        .write_report(&mut modules, &mut out, &mut diagnostics)
        .unwrap();

    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diagnostics).unwrap(),
        summary,
    )
}

#[test]
fn report_sorts_modules_and_drops_time_of_day() {
    let (out, diagnostics, _) = run("# b/x v1.0.0\n# a/y v2.0.0-20200101000000-aaaaaaaaaaaa\n");

    assert_eq!(
        out,
        "Provides: bundled(golang(a/y)) = 2.0.0-0.20200101gitaaaaaaaaaaaa\n\
         Provides: bundled(golang(b/x)) = 1.0.0\n"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn report_matches_real_vendoring_output() {
    let input = "\
# github.com/spf13/cobra v1.1.1
## explicit
github.com/spf13/cobra
# github.com/libvirt/libvirt-go-xml v6.8.0+incompatible
## explicit
github.com/libvirt/libvirt-go-xml
# gopkg.in/yaml.v3 v3.0.0-20210107192922-496545a6307b
gopkg.in/yaml.v3
# github.com/containers/image => github.com/openshift/containers-image v0.0.0-20190130162819-76de87591e9d
github.com/containers/image/docker
# k8s.io/client-go v0.19.0 => github.com/openshift/kubernetes-client-go v1.20.0-alpha.0.0.20200922142336-4700daee7399
## explicit
k8s.io/client-go/rest
# github.com/docker/docker v1.13.1 => github.com/docker/docker v1.4.2-0.20191121165722-d1d5f6476656
github.com/docker/docker/api
";

    let (out, diagnostics, summary) = run(input);

    assert_eq!(
        out,
        "\
Provides: bundled(golang(github.com/docker/docker)) = 1.4.2-0.20191121gitd1d5f6476656
Provides: bundled(golang(github.com/libvirt/libvirt-go-xml)) = 6.8.0
Provides: bundled(golang(github.com/openshift/containers-image)) = 0.0.0-0.20190130git76de87591e9d
Provides: bundled(golang(github.com/openshift/kubernetes-client-go)) = 1.20.0-0.alpha.20200922git4700daee7399
Provides: bundled(golang(github.com/spf13/cobra)) = 1.1.1
Provides: bundled(golang(gopkg.in/yaml.v3)) = 3.0.0-0.20210107git496545a6307b
"
    );
    assert!(diagnostics.is_empty());
    assert_eq!(
        summary,
        ReportSummary {
            versioned: 6,
            unversioned: 0
        }
    );
}

#[test]
fn report_keeps_modules_with_untranslatable_versions() {
    let input = "\
# github.com/docker/docker v17.12.0-ce-rc1.0.20200309214505-aa6a9891b09c+incompatible
# example.com/tool v1.0.0-rc1
# example.com/lib v1.2.3
";

    let (out, diagnostics, summary) = run(input);

    assert_eq!(
        out,
        "\
Provides: bundled(golang(example.com/lib)) = 1.2.3
Provides: bundled(golang(example.com/tool))
Provides: bundled(golang(github.com/docker/docker))
"
    );
    let diagnostics: Vec<&str> = diagnostics.lines().collect();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].starts_with("failed to parse version v1.0.0-rc1: "));
    assert!(diagnostics[0].ends_with(" for module example.com/tool"));
    assert!(diagnostics[1].ends_with(" for module github.com/docker/docker"));
    assert_eq!(summary.unversioned, 2);
}

#[test]
fn report_surfaces_malformed_lines_without_stopping() {
    let input = "\
# example.com/a v1.0.0 trailing
# example.com/b v0.1.0 => example.com/c
# example.com/d v2.0.0
";

    let (out, diagnostics, _) = run(input);

    assert_eq!(out, "Provides: bundled(golang(example.com/d)) = 2.0.0\n");
    let diagnostics: Vec<&str> = diagnostics.lines().collect();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].starts_with("failed to parse line: "));
    assert!(diagnostics[0].ends_with("for \"# example.com/a v1.0.0 trailing\""));
    assert!(diagnostics[1].ends_with("for \"# example.com/b v0.1.0 => example.com/c\""));
}

#[test]
fn report_is_empty_for_output_without_modules() {
    let (out, diagnostics, summary) = run("go: downloading example.com/a v1.0.0\n\n## explicit\n");

    assert!(out.is_empty());
    assert!(diagnostics.is_empty());
    assert_eq!(summary, ReportSummary::default());
}
