//! Root document component - the complete HTML page for static output.

use leptos::prelude::*;

use super::AppLayout;
use crate::PageOptions;
use crate::styles::{CSP, stylesheet};

#[component]
pub fn PageDocument(options: PageOptions) -> impl IntoView {
    let PageOptions {
        title,
        description,
        lang,
        layout,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{stylesheet()}</style>
            </head>
            <body>
                <AppLayout layout=Signal::stored(layout) />
            </body>
        </html>
    }
}
