use std::{collections::HashMap, sync::Arc};

use anyhow::{anyhow, Result};
use js_sys::{Object, Reflect, Uint8Array};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.into())
}

/// Convert a JS object { "shelters.json": Uint8Array, ... } to an in-memory data source.
pub(crate) fn js_files_to_memsource(files: JsValue) -> Result<sanlilim_core::MemSource> {
    let obj: Object = files.dyn_into().map_err(|_| anyhow!("files must be an object"))?;
    let keys = Object::keys(&obj);

    let mut map: HashMap<String, Arc<[u8]>> = HashMap::with_capacity(keys.length() as usize);

    for i in 0..keys.length() {
        let k = keys.get(i).as_string().ok_or_else(|| anyhow!("non-string key"))?;
        let v = Reflect::get(&obj, &JsValue::from_str(&k))
            .map_err(|e| anyhow!("error getting property '{}': {:?}", k, e))?;

        // Strings are taken as UTF-8 text, anything else as Uint8Array-like
        let buf = match v.as_string() {
            Some(text) => text.into_bytes(),
            None => {
                let u8arr = Uint8Array::new(&v);
                let mut buf = vec![0u8; u8arr.length() as usize];
                u8arr.copy_to(&mut buf[..]);
                buf
            }
        };

        map.insert(k, Arc::from(buf));
    }

    Ok(sanlilim_core::MemSource::new(map))
}

/// Parse a JSON document handed over as a JS string or object.
pub(crate) fn js_json(value: JsValue) -> Result<serde_json::Value> {
    match value.as_string() {
        Some(text) => serde_json::from_str(&text).map_err(|e| anyhow!("invalid JSON response: {e}")),
        None => serde_wasm_bindgen::from_value(value).map_err(|e| anyhow!("invalid response object: {e}")),
    }
}
