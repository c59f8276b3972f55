use folio_core::{decode_gltf, MeshData};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        anyhow::bail!("GET {} returned {}", url, response.status());
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch and decode a binary glTF model into a single mesh.
pub async fn load_model(url: &str) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(url).await?;
    let mesh = decode_gltf(&bytes)?;
    log::info!(
        "[assets] {} loaded: {} bytes, {} triangles",
        url,
        bytes.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
