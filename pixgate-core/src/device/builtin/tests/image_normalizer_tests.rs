use crate::ctx::RequestCtx;
use crate::device::builtin::image_normalizer::ImageNormalizerDevice;
use crate::device::core::{Device, DeviceResult};
use http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use pretty_assertions::assert_eq;

fn device_config(toml_str: &str) -> toml::Value {
    toml::from_str(toml_str).expect("test device config parses")
}

fn normalizer() -> ImageNormalizerDevice {
    ImageNormalizerDevice::from_config(&device_config(
        r#"
[redirect]
extensions = [".gif", ".avif"]
"#,
    ))
    .expect("device builds")
}

fn hydrated_ctx(uri: &str, host: Option<&str>, accept: Option<&str>) -> RequestCtx {
    let uri: Uri = uri.parse().expect("valid test uri");

    let mut headers = HeaderMap::new();
    if let Some(host) = host {
        headers.insert(header::HOST, HeaderValue::from_str(host).expect("host"));
    }
    if let Some(accept) = accept {
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_str(accept).expect("accept"),
        );
    }

    let mut ctx = RequestCtx::empty();
    ctx.hydrate(&uri, &Method::GET, &headers)
        .expect("hydration succeeds");
    ctx
}

#[test]
fn rewrites_the_upstream_path_and_continues() {
    // Arrange
    let device = normalizer();
    let mut ctx = hydrated_ctx("/images/cat.jpg?w=250&f=webp", None, None);

    // Act
    let result = device.on_request(&mut ctx);

    // Assert
    assert!(matches!(result, DeviceResult::Continue));
    assert_eq!(ctx.upstream_path(), "/images/cat.jpg/format=webp,width=200");
}

#[test]
fn accept_header_steers_the_default_variant() {
    let device = normalizer();
    let mut ctx = hydrated_ctx("/images/dog.png", None, Some("image/webp,*/*"));

    let result = device.on_request(&mut ctx);

    assert!(matches!(result, DeviceResult::Continue));
    assert_eq!(ctx.upstream_path(), "/images/dog.png/format=webp,width=400");
}

#[test]
fn bypass_extension_responds_with_a_redirect() {
    let device = normalizer();
    let mut ctx = hydrated_ctx("/images/banner.gif", Some("cdn.cacheimg.com"), None);

    let result = device.on_request(&mut ctx);

    match result {
        DeviceResult::Respond(resp) => {
            assert_eq!(resp.status, StatusCode::FOUND);
            assert_eq!(
                resp.headers
                    .get(header::LOCATION)
                    .and_then(|v| v.to_str().ok()),
                Some("https://minio.cacheimg.com/img/720/0/resize/images/banner.gif")
            );
        }
        other => panic!("Expected Respond, got {:?}", other),
    }
}

#[test]
fn builds_from_an_empty_blob() {
    let device = ImageNormalizerDevice::from_config(&device_config("")).expect("device builds");
    let mut ctx = hydrated_ctx("/images/x.jpg?q=999", None, None);

    let result = device.on_request(&mut ctx);

    assert!(matches!(result, DeviceResult::Continue));
    assert_eq!(
        ctx.upstream_path(),
        "/images/x.jpg/format=jpeg,quality=100,width=400"
    );
}

#[test]
fn rejects_a_bad_blob() {
    let result = ImageNormalizerDevice::from_config(&device_config(
        r#"
width_buckets = [400, 200]
"#,
    ));

    assert!(result.is_err());
}
