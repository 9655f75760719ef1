use std::fs;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Write `browserconfig.xml` into `out_dir`, overwriting any existing file.
/// The document references `/mstile-150x150.png` as the 150x150 tile image
/// and carries the supplied tile color.
pub fn write_browserconfig(out_dir: &Path, tile_color: &str) -> Result<()> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("browserconfig")))?;
    writer.write_event(Event::Start(BytesStart::new("msapplication")))?;
    writer.write_event(Event::Start(BytesStart::new("tile")))?;

    let logo =
        BytesStart::new("square150x150logo").with_attributes([("src", "/mstile-150x150.png")]);
    writer.write_event(Event::Empty(logo))?;

    writer.write_event(Event::Start(BytesStart::new("TileColor")))?;
    writer.write_event(Event::Text(BytesText::new(tile_color)))?;
    writer.write_event(Event::End(BytesEnd::new("TileColor")))?;

    writer.write_event(Event::End(BytesEnd::new("tile")))?;
    writer.write_event(Event::End(BytesEnd::new("msapplication")))?;
    writer.write_event(Event::End(BytesEnd::new("browserconfig")))?;

    let mut xml = writer.into_inner();
    xml.push(b'\n');
    fs::write(out_dir.join("browserconfig.xml"), xml)?;
    Ok(())
}
