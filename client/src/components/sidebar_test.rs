use super::*;

#[test]
fn nav_items_for_user_role() {
    let labels: Vec<&str> = nav_items(Role::User).iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Home", "Upload Document", "My Documents", "Flag Document"]);
    assert!(nav_items(Role::User).iter().all(|i| i.path.starts_with("/user")));
}

#[test]
fn nav_items_for_authority_role() {
    let labels: Vec<&str> = nav_items(Role::Authority).iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Home", "Issue Document", "Issued Documents", "Verify Document"]);
    assert!(nav_items(Role::Authority).iter().all(|i| i.path.starts_with("/authority")));
}

#[test]
fn first_item_is_role_home() {
    for role in [Role::User, Role::Authority] {
        assert_eq!(nav_items(role)[0].path, role.home_path());
    }
}

#[test]
fn is_active_requires_exact_match() {
    assert!(is_active("/user/upload", "/user/upload"));
    assert!(!is_active("/user/upload", "/user"));
    assert!(!is_active("/user", "/user/upload"));
}

#[test]
fn is_active_ignores_trailing_slash() {
    assert!(is_active("/user/upload/", "/user/upload"));
    assert!(is_active("/", "/"));
}
