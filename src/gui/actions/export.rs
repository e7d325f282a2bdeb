// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any session borrows
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.state.gui.out_path_dirty = false;
    }

    if !app.session.has_results() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let result = {
        let groups = app.session.groups();
        logf!(
            "Export: Begin facilities={}, format={:?}",
            groups.len(),
            app.state.options.export.format
        );
        file::write_export(&app.state.options.export, &groups)
    };

    let status_msg = match result {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported to {}", path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    // mutate app only after the dataset borrows are gone
    app.status(status_msg);
}
