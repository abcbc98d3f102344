pub(crate) mod svg;
pub(crate) mod uri;

pub(crate) use svg::ticket_description;
pub(crate) use uri::svg_data_uri;
