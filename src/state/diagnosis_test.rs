use super::*;

#[test]
fn no_file_blocks_submission() {
    let selection = SelectedImage::default();
    assert_eq!(
        selection.validate(),
        Some("Please choose a crop photo to upload.")
    );
}

#[test]
fn unsupported_type_blocks_submission() {
    let selection = SelectedImage {
        file_name: "leaf.gif".to_owned(),
        content_type: "image/gif".to_owned(),
    };
    assert_eq!(
        selection.validate(),
        Some("Only JPEG and PNG images are supported.")
    );
}

#[test]
fn jpeg_and_png_pass_validation() {
    for ty in ["image/jpeg", "image/png"] {
        let selection = SelectedImage {
            file_name: "leaf.img".to_owned(),
            content_type: ty.to_owned(),
        };
        assert_eq!(selection.validate(), None);
    }
}

#[test]
fn supported_type_check_is_exact() {
    assert!(is_supported_type("image/jpeg"));
    assert!(is_supported_type("image/png"));
    assert!(!is_supported_type("image/webp"));
    assert!(!is_supported_type(""));
}

#[test]
fn reset_clears_selection() {
    let mut selection = SelectedImage {
        file_name: "leaf.png".to_owned(),
        content_type: "image/png".to_owned(),
    };
    selection.reset();
    assert_eq!(selection, SelectedImage::default());
}
