use super::*;

#[test]
fn test_https_url_with_git_suffix() {
    assert_eq!(
        extract_path("https://host/path/to/repo.git"),
        "/path/to/repo"
    );
}

#[test]
fn test_git_suffix_variants_strip_exactly_once() {
    assert_eq!(
        extract_path("https://host/path/to/repo"),
        "/path/to/repo"
    );
    assert_eq!(
        extract_path("https://host/path/to/repo.git/"),
        "/path/to/repo"
    );
    // Only one strip, not recursive.
    assert_eq!(
        extract_path("https://host/path/to/repo.git.git"),
        "/path/to/repo.git"
    );
}

#[test]
fn test_git_protocol_url_with_port() {
    assert_eq!(
        extract_path("git://git.gryphon.zone:9418/path/to/repository.git"),
        "/path/to/repository"
    );
}

#[test]
fn test_ssh_url_with_user_and_port() {
    assert_eq!(
        extract_path("ssh://git@git.gryphon.zone:22/path/to/repository"),
        "/path/to/repository"
    );
}

#[test]
fn test_file_url() {
    assert_eq!(
        extract_path("file://localhost/path/to/repository.git"),
        "/path/to/repository"
    );
    assert_eq!(extract_path("file:///path/to/repo"), "/path/to/repo");
}

#[test]
fn test_scheme_matching_is_case_insensitive() {
    assert_eq!(extract_path("HTTPS://host/Path/To/Repo"), "/Path/To/Repo");
}

#[test]
fn test_scp_style_reference() {
    assert_eq!(
        extract_path("user@host:path/to/repo.git"),
        "path/to/repo"
    );
    assert_eq!(
        extract_path("git@git.gryphon.zone:/foo/bar.git"),
        "/foo/bar"
    );
}

#[test]
fn test_scp_style_without_user() {
    assert_eq!(
        extract_path("git.gryphon.zone:path/to/repository"),
        "path/to/repository"
    );
    // Everything after the first colon counts as the path, ports included.
    assert_eq!(
        extract_path("git.gryphon.zone:22/path/to/repository"),
        "22/path/to/repository"
    );
}

#[test]
fn test_local_path_with_colon_after_slash() {
    // A slash before the first colon rules out SCP syntax.
    assert_eq!(extract_path("./foo:bar"), "./foo:bar");
    assert_eq!(extract_path("/some/dir:with:colons"), "/some/dir:with:colons");
}

#[test]
fn test_bare_local_paths_returned_unchanged() {
    assert_eq!(extract_path("path/to/repo"), "path/to/repo");
    assert_eq!(extract_path("/path/to/repo.git"), "/path/to/repo");
    assert_eq!(
        extract_path("git.gryphon.zone/path/to/repository"),
        "git.gryphon.zone/path/to/repository"
    );
}

#[test]
fn test_empty_input_yields_empty_path() {
    assert_eq!(extract_path(""), "");
}

#[test]
fn test_url_without_path_yields_empty_or_root() {
    assert_eq!(extract_path("https://host"), "/");
    assert_eq!(extract_path("ssh://q@host:456/"), "/");
}
