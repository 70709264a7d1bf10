use crate::core::bodies;
use crate::core::loading::{LoadOutcome, LoadTracker};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("fetch {path} failed: {reason}")]
    Fetch { path: &'static str, reason: String },
    #[error("{path} returned HTTP {status}")]
    Status { path: &'static str, status: u16 },
    #[error("decode {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: image::ImageError,
    },
}

/// RGBA8 pixels ready for upload.
pub struct DecodedTexture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decoded textures waiting for the GPU plus the load bookkeeping the loading
/// screen reads.
pub struct AssetStore {
    pub tracker: LoadTracker,
    ready: FnvHashMap<&'static str, DecodedTexture>,
}

impl AssetStore {
    pub fn new(total: usize) -> Self {
        Self {
            tracker: LoadTracker::new(total),
            ready: FnvHashMap::default(),
        }
    }

    fn finish(&mut self, path: &'static str, result: Result<DecodedTexture, AssetError>) {
        match result {
            Ok(tex) => {
                log::info!("[assets] loaded {} ({}x{})", path, tex.width, tex.height);
                self.ready.insert(path, tex);
                self.tracker.record(LoadOutcome::Loaded);
            }
            Err(e) => {
                log::warn!("[assets] {}; using fallback colour", e);
                self.tracker.record(LoadOutcome::Failed);
            }
        }
    }

    /// Drain textures decoded since the last call.
    pub fn take_ready(&mut self) -> Vec<(&'static str, DecodedTexture)> {
        self.ready.drain().collect()
    }
}

fn js_reason(v: wasm_bindgen::JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{:?}", v))
}

async fn fetch_bytes(path: &'static str) -> Result<Vec<u8>, AssetError> {
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        path,
        reason: "no window".into(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| AssetError::Fetch {
            path,
            reason: js_reason(e),
        })?;
    let resp: web::Response = resp_value.dyn_into().map_err(|e| AssetError::Fetch {
        path,
        reason: js_reason(e),
    })?;
    if !resp.ok() {
        return Err(AssetError::Status {
            path,
            status: resp.status(),
        });
    }
    let promise = resp.array_buffer().map_err(|e| AssetError::Fetch {
        path,
        reason: js_reason(e),
    })?;
    let buf = JsFuture::from(promise).await.map_err(|e| AssetError::Fetch {
        path,
        reason: js_reason(e),
    })?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub fn decode(path: &'static str, bytes: &[u8]) -> Result<DecodedTexture, AssetError> {
    let img = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Decode { path, source })?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(DecodedTexture {
        width,
        height,
        rgba: img.into_raw(),
    })
}

async fn load_texture(path: &'static str) -> Result<DecodedTexture, AssetError> {
    let bytes = fetch_bytes(path).await?;
    decode(path, &bytes)
}

/// Start one fetch per scene texture. Completion only feeds the store; the
/// frame loop uploads and swaps out the fallback.
pub fn spawn_preload(store: &Rc<RefCell<AssetStore>>) {
    let paths = bodies::texture_paths();
    log::info!("[assets] preloading {} textures", paths.len());
    for path in paths {
        let store = store.clone();
        spawn_local(async move {
            let result = load_texture(path).await;
            store.borrow_mut().finish(path, result);
        });
    }
}
