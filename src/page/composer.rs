//! Hole page composer
//!
//! The page is written into one buffer through a sequence of stages. Each
//! stage consumes the writer and returns the next, so the `data-*`
//! attributes can only be appended while the `#hole` tag is still open and
//! the roster can only follow the body.

use std::marker::PhantomData;

use crate::{
    config::AssetsConfig,
    constants::{GITHUB_AUTHORIZE_URL, GITHUB_CLIENT_ID, GITHUB_SCOPE, NOT_TRIED_LABEL},
    middleware::Identity,
    models::{Hole, Lang},
    utils::escape_quotes,
};

use super::hydration::Hydration;

/// Composer stages, in emission order
pub mod stage {
    pub struct Document;
    pub struct Head;
    pub struct AuthGate;
    pub struct Body;
    pub struct Roster;
    pub struct Close;
}

/// Result panels filled in by the hole script, as (id, heading)
const PANELS: [(&str, &str); 4] = [
    ("Arg", "Program Arguments"),
    ("Err", "Standard Error"),
    ("Exp", "Expected Output"),
    ("Out", "Standard Output"),
];

pub struct PageWriter<S> {
    buf: String,
    _stage: PhantomData<S>,
}

impl<S> PageWriter<S> {
    fn advance<T>(self) -> PageWriter<T> {
        PageWriter {
            buf: self.buf,
            _stage: PhantomData,
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }
}

impl Default for PageWriter<stage::Document> {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWriter<stage::Document> {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
            _stage: PhantomData,
        }
    }

    /// Doctype, base stylesheet, title and site navigation
    pub fn site_header(
        mut self,
        assets: &AssetsConfig,
        identity: &Identity,
        title: &str,
    ) -> PageWriter<stage::Head> {
        self.push("<!doctype html><html lang=en><meta charset=utf-8>");
        self.push("<meta name=viewport content=\"width=device-width\">");
        self.push("<link rel=stylesheet href=");
        self.push(&assets.base_css);
        self.push("><title>");
        if !title.is_empty() {
            self.push(title);
            self.push(" | ");
        }
        self.push("Code Golf</title><header><nav><a href=/>Code Golf</a>");
        if let Some(user) = identity.user() {
            self.push("<a href=\"/users/");
            self.push(&escape_quotes(&user.login));
            self.push("\">");
            self.push(&user.login);
            self.push("</a>");
        }
        self.push("</nav></header>");
        self.advance()
    }
}

impl PageWriter<stage::Head> {
    /// Hole assets, the four result panels, and the still-open `#hole` tag
    pub fn head(mut self, assets: &AssetsConfig) -> PageWriter<stage::AuthGate> {
        self.push("<link rel=stylesheet href=");
        self.push(&assets.hole_css);
        self.push("><script async src=");
        self.push(&assets.hole_js);
        self.push("></script><div id=status><div>");
        for (id, heading) in PANELS {
            self.push("<h2>");
            self.push(heading);
            self.push("</h2><pre id=");
            self.push(id);
            self.push("></pre>");
        }
        self.push("</div></div><main id=hole");
        self.advance()
    }
}

impl PageWriter<stage::AuthGate> {
    /// Close the tag and prompt for login
    pub fn anonymous(mut self) -> PageWriter<stage::Body> {
        self.push("><div id=alert>Please <a href=\"");
        self.push(GITHUB_AUTHORIZE_URL);
        self.push("?client_id=");
        self.push(GITHUB_CLIENT_ID);
        self.push("&scope=");
        self.push(GITHUB_SCOPE);
        self.push(
            "\">login with GitHub</a> in order to save solutions \
             and appear on the leaderboards.</div>",
        );
        self.advance()
    }

    /// Append the hydration attributes, then close the tag
    pub fn hydrated(mut self, hydration: &Hydration) -> PageWriter<stage::Body> {
        for attribute in hydration.attributes() {
            self.push(attribute);
        }
        self.push(">");
        self.advance()
    }
}

impl PageWriter<stage::Body> {
    pub fn body(mut self, hole: &Hole) -> PageWriter<stage::Roster> {
        self.push("<h1>");
        self.push(&hole.name);
        self.push("</h1><p>");
        self.push(&hole.preamble);
        self.push("</p><button>Run</button><div id=tabs>");
        self.advance()
    }
}

impl PageWriter<stage::Roster> {
    /// One tab per language, all "not tried" until the script reconciles them
    pub fn roster(mut self, langs: &[Lang]) -> PageWriter<stage::Close> {
        for lang in langs {
            self.push("<a href=#");
            self.push(&lang.id);
            self.push(" title=\"");
            self.push(&lang.name);
            self.push("\">");
            self.push(NOT_TRIED_LABEL);
            self.push("</a>");
        }
        self.advance()
    }
}

impl PageWriter<stage::Close> {
    pub fn finish(mut self) -> String {
        self.push("</div></main>");
        self.buf
    }
}
