//! Integration tests for coordinate parsing and Maven layout resolution.
//!
//! These exercise the parser and locator together the way the batch
//! orchestrator does.

use mvnget_core::{
    ArtifactDescriptor, DEFAULT_REPOSITORY_URL, ParseError, artifact_url, file_name,
    normalize_repository_url, parse_coordinate,
};

fn resolve(coordinate: &str, repository: &str) -> String {
    let descriptor = parse_coordinate(coordinate)
        .expect("coordinate should parse")
        .with_repository(normalize_repository_url(repository));
    artifact_url(&descriptor).expect("descriptor should resolve")
}

#[test]
fn test_plain_coordinate_resolves_against_maven_central() {
    assert_eq!(
        resolve("org.example:lib:1.0", DEFAULT_REPOSITORY_URL),
        "https://repo1.maven.org/maven2/org/example/lib/1.0/lib-1.0.jar"
    );
}

#[test]
fn test_repository_without_trailing_slash_is_normalized() {
    assert_eq!(
        resolve("org.example:lib:1.0", "https://nexus.example.com/repository/releases"),
        "https://nexus.example.com/repository/releases/org/example/lib/1.0/lib-1.0.jar"
    );
}

#[test]
fn test_classifier_and_extension_reach_file_name() {
    let coordinate = "io.netty:netty-transport-native-epoll:4.1.100.Final:linux-x86_64@so";
    let descriptor = parse_coordinate(coordinate).expect("coordinate should parse");
    assert_eq!(
        file_name(&descriptor),
        "netty-transport-native-epoll-4.1.100.Final-linux-x86_64.so"
    );
}

#[test]
fn test_s3_repository_uses_same_layout() {
    assert_eq!(
        resolve("org.example:lib:1.0:sources", "s3://my-bucket/repo"),
        "s3://my-bucket/repo/org/example/lib/1.0/lib-1.0-sources.jar"
    );
}

#[test]
fn test_well_formed_coordinates_parse_to_expected_fields() {
    let cases = [
        ("g:a:v", ("g", "a", "v", None, "jar")),
        ("g:a:v@war", ("g", "a", "v", None, "war")),
        ("g:a:v:c", ("g", "a", "v", Some("c"), "jar")),
        ("g:a:v:c@ext", ("g", "a", "v", Some("c"), "ext")),
    ];
    for (input, (group, artifact, version, classifier, extension)) in cases {
        let d = parse_coordinate(input).expect("coordinate should parse");
        assert_eq!(d.group(), group, "{input}");
        assert_eq!(d.artifact(), artifact, "{input}");
        assert_eq!(d.version(), version, "{input}");
        assert_eq!(d.classifier(), classifier, "{input}");
        assert_eq!(d.extension(), extension, "{input}");
    }
}

#[test]
fn test_malformed_coordinates_are_parse_errors() {
    for input in ["", "g", "g:a", "g::v", "g:a:v:", "g:a:v@", "a:b:c:d:e"] {
        let err: ParseError = parse_coordinate(input).expect_err("should fail");
        assert_eq!(err.input(), input);
    }
}

#[test]
fn test_unparsed_descriptor_without_repository_fails_resolution() {
    let descriptor = ArtifactDescriptor::new("org.example", "lib", "1.0");
    assert!(artifact_url(&descriptor).is_err());
}
