// src/extractors/test_pdf.rs
//! Small PDFs built with lopdf for decoder tests.

use lopdf::encryption::{EncryptionState, EncryptionVersion, Permissions};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

/// One page per entry; each page shows its lines as separate text objects in Helvetica.
pub(crate) fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    save(document_with_font(helvetica(), pages))
}

/// A page whose font claims to be a composite (Type0) font but has no `DescendantFonts`.
/// pdf-extract panics on it rather than returning an error.
pub(crate) fn pdf_with_broken_type0_font() -> Vec<u8> {
    let font = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "X",
    };
    save(document_with_font(font, &[&["Hidden"]]))
}

/// A document that opens only with the user password `secret`.
pub(crate) fn password_protected_pdf() -> Vec<u8> {
    let mut doc = document_with_font(helvetica(), &[&["Confidential"]]);
    let id = Object::String(b"0123456789abcdef".to_vec(), StringFormat::Hexadecimal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password: "secret",
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
    save(doc)
}

/// Bytes that no PDF parser accepts.
pub(crate) fn corrupt_pdf() -> Vec<u8> {
    b"this is plain text, not a PDF document\n".to_vec()
}

fn helvetica() -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    }
}

fn document_with_font(font: Dictionary, pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_id),
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for lines in pages {
        let mut content = String::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 700 - (i as i64) * 20;
            content.push_str(&format!("BT /F1 12 Tf 72 {} Td ({}) Tj ET\n", y, line));
        }
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Reference(resources_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
