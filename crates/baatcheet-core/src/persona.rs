//! The fixed persona catalog.

/// A simulated chat identity.
///
/// Personas are immutable and live for the whole program; sessions hold
/// `&'static Persona` references into [`Persona::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    /// Stable identifier used when switching personas.
    pub id: &'static str,
    /// Name shown in the UI.
    pub display_name: &'static str,
    /// Avatar image URL.
    pub avatar_url: &'static str,
    /// Backend path segment serving this persona (without the leading slash).
    pub route: &'static str,
    /// Literal name handed to the response generator.
    pub generator_name: &'static str,
    /// Message that seeds every fresh conversation.
    pub greeting: &'static str,
    /// Whether user turns are answered by the backend.
    pub remote: bool,
}

/// Hitesh Choudhary.
pub const HITESH: Persona = Persona {
    id: "hitesh",
    display_name: "Hitesh Choudhary",
    avatar_url: "https://github.com/hiteshchoudhary.png",
    route: "hiteshsir",
    generator_name: "Hitesh Choudhary",
    greeting: "Kya haal hai bhai? Chai pee li ya code karte karte bhool gaya? 😎☕ Batao kya help chahiye, humesha ready hain! 😄",
    remote: true,
};

/// Piyush Garg.
pub const PIYUSH: Persona = Persona {
    id: "piyush",
    display_name: "Piyush Garg",
    avatar_url: "https://github.com/piyushgarg-dev.png",
    route: "piyushsir",
    generator_name: "Piyush Garg",
    greeting: "Kya haal hai bhai! 🔥 Piyush Garg here, at your service. Batao kya help kar sakta hu? 😎",
    remote: true,
};

static CATALOG: [Persona; 2] = [HITESH, PIYUSH];

impl Persona {
    /// All known personas, default first.
    pub fn all() -> &'static [Persona] {
        &CATALOG
    }

    /// Persona selected when a session starts.
    pub fn default_persona() -> &'static Persona {
        &CATALOG[0]
    }

    /// Look up a persona by id.
    pub fn find(id: &str) -> Option<&'static Persona> {
        CATALOG.iter().find(|p| p.id == id)
    }

    /// Look up a persona by backend route segment.
    pub fn by_route(route: &str) -> Option<&'static Persona> {
        let route = route.trim_start_matches('/');
        CATALOG.iter().find(|p| p.route == route)
    }

    /// Backend path, e.g. `/hiteshsir`.
    pub fn path(&self) -> String {
        format!("/{}", self.route)
    }

    /// The persona after this one in catalog order, wrapping around.
    pub fn next(&self) -> &'static Persona {
        let idx = CATALOG.iter().position(|p| p.id == self.id).unwrap_or(0);
        &CATALOG[(idx + 1) % CATALOG.len()]
    }
}
