// src/gui/actions/load.rs
use crate::{
    actions::should_attach,
    gui::app::App,
    source::{self, PageSource},
};

/// Load the page named in the source field and decide whether to attach the tools.
pub fn load(app: &mut App) {
    let gui = &app.state.gui;
    let url_text = gui.url_text.trim();
    app.state.options.url_override = (!url_text.is_empty()).then(|| s!(url_text));

    let src = match PageSource::parse(&gui.source_text) {
        Ok(src) => src,
        Err(e) => {
            logd!("Load: bad source {:?}: {}", gui.source_text, e);
            return app.status(format!("Error: {e}"));
        }
    };
    app.state.options.source = Some(src.clone());

    logf!("Load: Begin {:?}", src);
    match source::load(&src, &app.state.options) {
        Ok(loaded) => {
            app.attached = should_attach(&loaded.snapshot());
            app.state.gui.last_details = None;
            app.state.gui.last_copied = None;
            if app.attached {
                app.status(format!("Loaded {}", loaded.url));
            } else {
                logw!("Load: bot wall on {}", loaded.url);
                app.status("Bot check page: tools not attached");
            }
            app.page = Some(loaded);
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.page = None;
            app.attached = false;
            app.status(format!("Error: {e}"));
        }
    }
}
