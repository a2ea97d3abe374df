use folio_core::{ThemeMode, THEME_STORAGE_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    window.local_storage().ok().flatten()
}

pub(crate) fn load_theme_mode() -> ThemeMode {
    let stored = local_storage()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemeMode::from_storage(stored.as_deref())
}

pub(crate) fn persist_theme_mode(mode: ThemeMode) {
    let Some(storage) = local_storage() else {
        gloo::console::warn!("theme not persisted: storage unavailable");
        return;
    };
    if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
        gloo::console::warn!("theme not persisted:", mode.as_str());
    }
}

pub(crate) fn apply_theme_mode(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1(mode.toggled().root_class());
    let _ = classes.add_1(mode.root_class());
}
