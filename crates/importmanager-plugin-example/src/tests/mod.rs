//! Unit and behavioural tests for the example plugin dispatcher.


use camino::Utf8PathBuf;
use importmanager_plugins::{BundleField, ContractError, OperationBundle};
use rstest::{fixture, rstest};

use crate::{
    BasenameRelocation, PluginError, PostProcessError, PostProcessor,
    parse_invocation, run, run_with_processor,
};

const PROGRAM: &str = "importmanager-plugin-example";
const COPY_ARGUMENT: &str =
    r#"{"source":"/a/b/file.txt","destination":"/out","details":"copy","properties":{}}"#;
const NULL_ARGUMENT: &str = r#"{"source":"/x","destination":"/y","details":null,"properties":null}"#;

struct FailingProcessor;

impl PostProcessor for FailingProcessor {
    fn process(
        &self,
        _bundle: &OperationBundle,
    ) -> Result<Option<Utf8PathBuf>, PostProcessError> {
        Err(PostProcessError::Failed {
            message: String::from("destination is read-only"),
        })
    }
}

struct Outcome {
    result: Result<(), PluginError>,
    stdout: String,
}

fn invoke<P: PostProcessor>(args: &[&str], processor: &P) -> Outcome {
    let mut argv = vec![PROGRAM];
    argv.extend_from_slice(args);
    let mut stdout = Vec::new();
    let result = run_with_processor(argv, &mut stdout, processor);
    Outcome {
        result,
        stdout: String::from_utf8(stdout).expect("utf8 stdout"),
    }
}

#[fixture]
fn relocation() -> BasenameRelocation {
    BasenameRelocation
}

// ---------------------------------------------------------------------------
// Successful invocations
// ---------------------------------------------------------------------------

#[rstest]
#[case::copy(COPY_ARGUMENT, "\n/a/b/file.txt\n/out\ncopy\n{}\n/out/file.txt\n")]
#[case::null_metadata(NULL_ARGUMENT, "\n/x\n/y\nnull\nnull\n/y/x\n")]
#[case::structured_metadata(
    r#"{"source":"/in/a.png","destination":"/pics","details":{"type":"image/png"},"properties":["x",1]}"#,
    "\n/in/a.png\n/pics\n{\"type\":\"image/png\"}\n[\"x\",1]\n/pics/a.png\n"
)]
fn valid_bundle_prints_fields_then_relocated_path(
    relocation: BasenameRelocation,
    #[case] argument: &str,
    #[case] expected: &str,
) {
    let outcome = invoke(&[argument], &relocation);
    outcome.result.expect("invocation should succeed");
    assert_eq!(outcome.stdout, expected);
}

#[rstest]
fn identical_bundles_produce_identical_output(relocation: BasenameRelocation) {
    let first = invoke(&[COPY_ARGUMENT], &relocation);
    let second = invoke(&[COPY_ARGUMENT], &relocation);
    assert!(first.result.is_ok() && second.result.is_ok());
    assert_eq!(first.stdout, second.stdout);
}

#[rstest]
fn source_without_basename_omits_relocated_path(relocation: BasenameRelocation) {
    let outcome = invoke(
        &[r#"{"source":"/","destination":"/out","details":null,"properties":null}"#],
        &relocation,
    );
    outcome.result.expect("invocation should succeed");
    assert_eq!(outcome.stdout, "\n/\n/out\nnull\nnull\n");
}

#[test]
fn run_uses_basename_relocation() {
    let mut stdout = Vec::new();
    run([PROGRAM, NULL_ARGUMENT], &mut stdout).expect("invocation should succeed");
    let text = String::from_utf8(stdout).expect("utf8 stdout");
    assert!(text.ends_with("/y/x\n"), "stdout: {text}");
}

// ---------------------------------------------------------------------------
// Contract failures
// ---------------------------------------------------------------------------

#[rstest]
fn missing_properties_fails_without_output(relocation: BasenameRelocation) {
    let outcome = invoke(
        &[r#"{"source":"/x","destination":"/y","details":null}"#],
        &relocation,
    );
    let error = outcome.result.expect_err("missing field should fail");
    assert!(
        matches!(
            error,
            PluginError::Contract(ContractError::MissingField {
                field: BundleField::Properties
            })
        ),
        "got: {error}"
    );
    assert!(outcome.stdout.is_empty(), "stdout: {}", outcome.stdout);
}

#[rstest]
#[case::not_json(&["not-json"])]
#[case::json_string(&["\"not-json\""])]
#[case::no_argument(&[])]
#[case::extra_argument(&[COPY_ARGUMENT, "surplus"])]
#[case::leading_hyphen(&["-1"])]
#[case::long_help(&["--help"])]
#[case::short_help(&["-h"])]
#[case::long_version(&["--version"])]
#[case::short_version(&["-V"])]
#[case::separator_only(&["--"])]
#[case::separator_before_bundle(&["--", NULL_ARGUMENT])]
fn malformed_invocations_fail_fast(relocation: BasenameRelocation, #[case] args: &[&str]) {
    let outcome = invoke(args, &relocation);
    let error = outcome.result.expect_err("malformed input should fail");
    assert!(error.is_malformed_input(), "got: {error}");
    assert!(outcome.stdout.is_empty(), "stdout: {}", outcome.stdout);
}

#[test]
fn surplus_arguments_are_counted_in_usage_error() {
    let error = parse_invocation([PROGRAM, "--", NULL_ARGUMENT])
        .expect_err("two arguments should fail");
    assert!(matches!(error, PluginError::Usage(_)), "got: {error}");
    assert!(
        error.to_string().contains("exactly one BUNDLE argument, found 2"),
        "got: {error}"
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_malformed() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let args = vec![
        OsString::from(PROGRAM),
        OsString::from_vec(vec![0x7b, 0xff, 0x7d]),
    ];
    let error = parse_invocation(args).expect_err("non-UTF-8 should fail");
    assert!(matches!(error, PluginError::Usage(_)), "got: {error}");
}

#[test]
fn invalid_path_type_is_not_malformed_input() {
    let error = parse_invocation([
        PROGRAM,
        r#"{"source":1,"destination":"/y","details":null,"properties":null}"#,
    ])
    .expect_err("numeric source should fail");
    assert!(!error.is_malformed_input(), "got: {error}");
    assert!(error.to_string().contains("'source'"), "got: {error}");
}

// ---------------------------------------------------------------------------
// Downstream failures
// ---------------------------------------------------------------------------

#[test]
fn processor_failure_keeps_field_output() {
    let outcome = invoke(&[COPY_ARGUMENT], &FailingProcessor);
    let error = outcome.result.expect_err("processor failure should propagate");
    assert!(matches!(error, PluginError::PostProcess(_)), "got: {error}");
    assert!(
        error.to_string().contains("destination is read-only"),
        "got: {error}"
    );
    assert_eq!(outcome.stdout, "\n/a/b/file.txt\n/out\ncopy\n{}\n");
}
