use clipper::models::{AssetFormat, CreateInquiry, Locale, MediaKind, MediaRoute};
use clipper::services::{blog, gallery, inquiry, media, reconcile};
use clipper::Database;
use std::fs;
use std::path::Path;

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

/// Item with one asset per format, all backed by real files under `root`.
fn seed_item(db: &Database, root: &Path, slug: &str) -> i64 {
    let item_id = gallery::create_item(db, slug, 1600, 1067, "data:image/jpeg;base64,xyz")
        .expect("Failed to create item");
    for format in AssetFormat::ALL {
        let rel = format!("processed/gallery/{}-800w.{}", slug, format.extension());
        let file = root.join(&rel);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, b"variant").unwrap();
        gallery::add_asset(db, item_id, format, 800, &rel, &format!("/media/{}", rel))
            .expect("Failed to add asset");
    }
    gallery::set_i18n(db, item_id, Locale::Pl, slug, "").expect("Failed to set i18n");
    item_id
}

mod seed_tests {
    use super::*;

    #[test]
    fn test_seed_classifies_by_extension() {
        let db = create_test_db();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpeg").unwrap();
        fs::write(dir.path().join("b.mp4"), b"mp4").unwrap();
        fs::write(dir.path().join("c.heic"), b"heic").unwrap();

        let report = media::seed_route(&db, MediaRoute::Gallery, dir.path()).unwrap();
        assert_eq!(report.inserted, 3);

        let files = media::list_media(&db, MediaRoute::Gallery).unwrap();
        assert_eq!(files.len(), 3);

        let kind_of = |name: &str| {
            files
                .iter()
                .find(|f| f.filename == name)
                .unwrap_or_else(|| panic!("missing {}", name))
                .kind
        };
        assert_eq!(kind_of("a.jpg"), MediaKind::Image);
        assert_eq!(kind_of("b.mp4"), MediaKind::Video);
        assert_eq!(kind_of("c.heic"), MediaKind::Image);

        for file in &files {
            assert_eq!(file.route, MediaRoute::Gallery);
            assert_eq!(file.url, format!("/media/gallery/{}", file.filename));
        }
    }

    #[test]
    fn test_seed_skips_unrecognized_files() {
        let db = create_test_db();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("photo.jpg"), b"jpeg").unwrap();
        fs::write(dir.path().join("notes.txt"), b"text").unwrap();

        let report = media::seed_route(&db, MediaRoute::Instructors, dir.path()).unwrap();
        assert_eq!(report.inserted, 1);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = create_test_db();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpeg").unwrap();
        fs::write(dir.path().join("b.mp4"), b"mp4").unwrap();

        let first = media::seed_route(&db, MediaRoute::Gallery, dir.path()).unwrap();
        assert_eq!(first.inserted, 2);

        let second = media::seed_route(&db, MediaRoute::Gallery, dir.path()).unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(media::list_media(&db, MediaRoute::Gallery).unwrap().len(), 2);
    }

    #[test]
    fn test_seed_missing_directory_is_skipped() {
        let db = create_test_db();
        let report =
            media::seed_route(&db, MediaRoute::Gallery, Path::new("/nonexistent/folder")).unwrap();
        assert_eq!(report.inserted, 0);
    }

    #[test]
    fn test_corrupt_media_kind_is_an_error() {
        let db = create_test_db();
        let conn = db.get().unwrap();
        // Simulate a row written outside the application.
        conn.execute_batch("PRAGMA ignore_check_constraints=ON;").unwrap();
        conn.execute(
            "INSERT INTO media_files (route, filename, kind, url, created_at) \
             VALUES ('gallery', 'scan.pdf', 'document', '/media/gallery/scan.pdf', '2026-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        assert!(media::list_media(&db, MediaRoute::Gallery).is_err());
    }

    #[test]
    fn test_sync_removes_records_for_deleted_files() {
        let db = create_test_db();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"jpeg").unwrap();
        fs::write(dir.path().join("b.mp4"), b"mp4").unwrap();

        media::seed_route(&db, MediaRoute::Gallery, dir.path()).unwrap();
        fs::remove_file(dir.path().join("b.mp4")).unwrap();

        let report = media::sync_route(&db, MediaRoute::Gallery, dir.path()).unwrap();
        assert_eq!(report.removed, 1);

        let files = media::list_media(&db, MediaRoute::Gallery).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "a.jpg");
    }
}

mod reconcile_tests {
    use super::*;

    #[test]
    fn test_broken_asset_is_dropped() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_item(&db, root.path(), "fade-classic");

        fs::remove_file(root.path().join("processed/gallery/fade-classic-800w.avif")).unwrap();

        let report = reconcile::cleanup_broken_assets(&db, root.path()).unwrap();
        assert_eq!(report.assets_removed, 1);
        assert_eq!(report.items_removed, 0);
        assert_eq!(report.i18n_removed, 0);

        // Item survives on its remaining formats.
        let page = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        assert_eq!(page.total_items, 1);
    }

    #[test]
    fn test_orphaned_item_cascades_with_i18n() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_item(&db, root.path(), "keeper");
        let doomed = seed_item(&db, root.path(), "doomed");
        gallery::set_i18n(&db, doomed, Locale::En, "Doomed", "").unwrap();

        for format in AssetFormat::ALL {
            fs::remove_file(
                root.path()
                    .join(format!("processed/gallery/doomed-800w.{}", format.extension())),
            )
            .unwrap();
        }

        let report = reconcile::cleanup_broken_assets(&db, root.path()).unwrap();
        assert_eq!(report.assets_removed, 3);
        assert_eq!(report.items_removed, 1);
        assert_eq!(report.i18n_removed, 2); // pl + en rows of the doomed item

        let page = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].slug, "keeper");
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_item(&db, root.path(), "keeper");
        seed_item(&db, root.path(), "doomed");

        for format in AssetFormat::ALL {
            fs::remove_file(
                root.path()
                    .join(format!("processed/gallery/doomed-800w.{}", format.extension())),
            )
            .unwrap();
        }

        let first = reconcile::cleanup_broken_assets(&db, root.path()).unwrap();
        assert!(!first.is_clean());

        let second = reconcile::cleanup_broken_assets(&db, root.path()).unwrap();
        assert!(second.is_clean());
    }

    #[test]
    fn test_clean_gallery_reports_clean() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_item(&db, root.path(), "keeper");

        let report = reconcile::cleanup_broken_assets(&db, root.path()).unwrap();
        assert!(report.is_clean());
    }
}

mod gallery_api_tests {
    use super::*;

    fn seed_items(db: &Database, root: &Path, count: usize) {
        for i in 0..count {
            seed_item(db, root, &format!("item-{:03}", i));
        }
    }

    #[test]
    fn test_pagination_contract() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_items(&db, root.path(), 25);

        let page1 = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.next_page, Some(2));
        assert_eq!(page1.total_items, 25);
        assert_eq!(page1.current_page, 1);
        assert_eq!(page1.page_size, 10);

        let page3 = gallery::list_page(&db, Locale::Pl, None, 3, 10).unwrap();
        assert_eq!(page3.items.len(), 5);
        assert_eq!(page3.next_page, None);
    }

    #[test]
    fn test_pagination_exact_boundary() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_items(&db, root.path(), 20);

        let page2 = gallery::list_page(&db, Locale::Pl, None, 2, 10).unwrap();
        assert_eq!(page2.items.len(), 10);
        assert_eq!(page2.next_page, None);
    }

    #[test]
    fn test_page_far_beyond_listing_is_empty() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_items(&db, root.path(), 3);

        let page = gallery::list_page(&db, Locale::Pl, None, u32::MAX as usize, 100).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_page, None);
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn test_items_carry_srcsets_and_blur_data() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        seed_item(&db, root.path(), "pompadour");

        let page = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        let item = &page.items[0];
        assert_eq!(item.w, 1600);
        assert_eq!(item.h, 1067);
        assert_eq!(
            item.srcsets.avif,
            "/media/processed/gallery/pompadour-800w.avif 800w"
        );
        assert_eq!(
            item.srcsets.webp,
            "/media/processed/gallery/pompadour-800w.webp 800w"
        );
        assert_eq!(
            item.srcsets.jpg,
            "/media/processed/gallery/pompadour-800w.jpg 800w"
        );
        assert!(item.blur_data.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_srcset_orders_widths_ascending() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        let item_id = seed_item(&db, root.path(), "texture-crop");
        for width in [1600, 400] {
            let rel = format!("processed/gallery/texture-crop-{}w.jpg", width);
            fs::write(root.path().join(&rel), b"variant").unwrap();
            gallery::add_asset(
                &db,
                item_id,
                AssetFormat::Jpg,
                width,
                &rel,
                &format!("/media/{}", rel),
            )
            .unwrap();
        }

        let page = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        assert_eq!(
            page.items[0].srcsets.jpg,
            "/media/processed/gallery/texture-crop-400w.jpg 400w, \
             /media/processed/gallery/texture-crop-800w.jpg 800w, \
             /media/processed/gallery/texture-crop-1600w.jpg 1600w"
        );
    }

    #[test]
    fn test_tag_filter_narrows_listing() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();

        let tagged = seed_item(&db, root.path(), "fade-one");
        let tagged_too = seed_item(&db, root.path(), "fade-two");
        seed_item(&db, root.path(), "beard-trim");

        let tag_id = gallery::ensure_tag(&db, "fade").unwrap();
        gallery::tag_item(&db, tagged, tag_id).unwrap();
        gallery::tag_item(&db, tagged_too, tag_id).unwrap();

        let page = gallery::list_page(&db, Locale::Pl, Some("fade"), 1, 10).unwrap();
        assert_eq!(page.total_items, 2);
        assert!(page.items.iter().all(|i| i.tags == vec!["fade"]));

        let all = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        assert_eq!(all.total_items, 3);
    }

    #[test]
    fn test_caption_locale_fallback() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();
        let item_id = seed_item(&db, root.path(), "skin-fade");
        gallery::set_i18n(&db, item_id, Locale::Pl, "Cieniowanie", "Cieniowanie na mokro")
            .unwrap();
        gallery::set_i18n(&db, item_id, Locale::En, "Skin fade", "Wet skin fade").unwrap();

        let en = gallery::list_page(&db, Locale::En, None, 1, 10).unwrap();
        assert_eq!(en.items[0].title, "Skin fade");
        assert_eq!(en.items[0].alt, "Wet skin fade");

        // No Ukrainian captions: Polish wins.
        let uk = gallery::list_page(&db, Locale::Uk, None, 1, 10).unwrap();
        assert_eq!(uk.items[0].title, "Cieniowanie");
        assert_eq!(uk.items[0].alt, "Cieniowanie na mokro");
    }

    #[test]
    fn test_tag_counts_and_localized_names() {
        let db = create_test_db();
        let root = tempfile::tempdir().unwrap();

        let a = seed_item(&db, root.path(), "item-a");
        let b = seed_item(&db, root.path(), "item-b");
        let c = seed_item(&db, root.path(), "item-c");

        let fade = gallery::ensure_tag(&db, "fade").unwrap();
        gallery::set_tag_name(&db, fade, Locale::Pl, "Cieniowanie").unwrap();
        gallery::set_tag_name(&db, fade, Locale::En, "Fade").unwrap();
        let beard = gallery::ensure_tag(&db, "beard").unwrap();

        gallery::tag_item(&db, a, fade).unwrap();
        gallery::tag_item(&db, b, fade).unwrap();
        gallery::tag_item(&db, c, beard).unwrap();

        let en = gallery::list_tags_with_counts(&db, Locale::En).unwrap();
        assert_eq!(en[0].slug, "fade");
        assert_eq!(en[0].name, "Fade");
        assert_eq!(en[0].count, 2);
        // No i18n rows at all: slug stands in for the name.
        assert_eq!(en[1].name, "beard");
        assert_eq!(en[1].count, 1);

        // Ukrainian has no names: Polish wins.
        let uk = gallery::list_tags_with_counts(&db, Locale::Uk).unwrap();
        assert_eq!(uk[0].name, "Cieniowanie");
    }
}

mod ingest_tests {
    use super::*;
    use clipper::services::{ingest, variants};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 72, 48]),
        ));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_variants_small_image_keeps_own_width() {
        let set = variants::generate_variants(&png_bytes(120, 90)).unwrap();
        assert_eq!(set.width, 120);
        assert_eq!(set.height, 90);
        // One file per format at the image's own width.
        assert_eq!(set.files.len(), 3);
        assert!(set.files.iter().all(|f| f.width == 120));
        assert!(set.blur_data.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_variants_skip_widths_above_original() {
        let set = variants::generate_variants(&png_bytes(810, 540)).unwrap();

        let mut widths: Vec<u32> = set.files.iter().map(|f| f.width).collect();
        widths.sort();
        widths.dedup();
        assert_eq!(widths, vec![400, 800]);

        assert_eq!(set.files.len(), 6);
        for format in AssetFormat::ALL {
            assert_eq!(set.files.iter().filter(|f| f.format == format).count(), 2);
        }
    }

    #[test]
    fn test_ingest_imports_tags_and_dedupes() {
        let db = create_test_db();
        let media_root = tempfile::tempdir().unwrap();
        let source = tempfile::tempdir().unwrap();
        fs::write(source.path().join("Fade Cut.png"), png_bytes(500, 400)).unwrap();
        fs::write(source.path().join("notes.txt"), b"text").unwrap();

        let report =
            ingest::ingest_dir(&db, media_root.path(), "processed", source.path(), Some("fade"))
                .unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 0);

        let page = gallery::list_page(&db, Locale::Pl, None, 1, 10).unwrap();
        assert_eq!(page.total_items, 1);
        let item = &page.items[0];
        assert_eq!(item.slug, "fade-cut");
        assert_eq!(item.title, "fade cut");
        assert_eq!(item.w, 500);
        assert_eq!(item.h, 400);
        assert_eq!(item.tags, vec!["fade"]);
        assert!(item
            .srcsets
            .avif
            .contains("/media/processed/gallery/fade-cut-400w-"));
        assert!(item.blur_data.starts_with("data:image/jpeg;base64,"));

        // 500px source yields only the 400 tier, one file per format.
        let written = fs::read_dir(media_root.path().join("processed/gallery"))
            .unwrap()
            .count();
        assert_eq!(written, 3);

        let again =
            ingest::ingest_dir(&db, media_root.path(), "processed", source.path(), Some("fade"))
                .unwrap();
        assert_eq!(again.imported, 0);
        assert_eq!(again.skipped, 1);
        assert_eq!(
            gallery::list_page(&db, Locale::Pl, None, 1, 10)
                .unwrap()
                .total_items,
            1
        );
    }

    #[test]
    fn test_ingest_skips_undecodable_files() {
        let db = create_test_db();
        let media_root = tempfile::tempdir().unwrap();
        let source = tempfile::tempdir().unwrap();
        fs::write(source.path().join("holiday.heic"), b"not really an image").unwrap();

        let report =
            ingest::ingest_dir(&db, media_root.path(), "processed", source.path(), None).unwrap();
        assert_eq!(report.imported, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            gallery::list_page(&db, Locale::Pl, None, 1, 10)
                .unwrap()
                .total_items,
            0
        );
    }
}

mod inquiry_tests {
    use super::*;

    #[test]
    fn test_create_and_list_inquiry() {
        let db = create_test_db();

        let created = inquiry::create_inquiry(
            &db,
            CreateInquiry {
                name: "Jan Kowalski".to_string(),
                email: "jan@example.com".to_string(),
                phone: Some("+48 600 000 000".to_string()),
                program: Some("barber-basics".to_string()),
                message: "I would like to enroll.".to_string(),
            },
        )
        .expect("Failed to create inquiry");

        assert!(created.id > 0);

        let inquiries = inquiry::list_inquiries(&db, 10, 0).unwrap();
        assert_eq!(inquiries.len(), 1);
        assert_eq!(inquiries[0].name, "Jan Kowalski");
        assert_eq!(inquiries[0].program.as_deref(), Some("barber-basics"));
    }

    #[test]
    fn test_invalid_inquiry_is_rejected() {
        let db = create_test_db();

        let result = inquiry::create_inquiry(
            &db,
            CreateInquiry {
                name: String::new(),
                email: "jan@example.com".to_string(),
                phone: None,
                program: None,
                message: "hello".to_string(),
            },
        );

        assert!(result.is_err());
        assert!(inquiry::list_inquiries(&db, 10, 0).unwrap().is_empty());
    }
}

mod blog_tests {
    use super::*;

    #[test]
    fn test_previews_filter_by_language_newest_first() {
        let db = create_test_db();

        blog::create_post(
            &db,
            "pierwszy-wpis",
            Locale::Pl,
            "Pierwszy wpis",
            "Zapowiedź",
            None,
            Some("2026-01-01T10:00:00Z"),
        )
        .unwrap();
        blog::create_post(
            &db,
            "drugi-wpis",
            Locale::Pl,
            "Drugi wpis",
            "Zapowiedź",
            Some("/media/gallery/cover.jpg"),
            Some("2026-02-01T10:00:00Z"),
        )
        .unwrap();
        blog::create_post(
            &db,
            "first-post",
            Locale::En,
            "First post",
            "Preview",
            None,
            Some("2026-01-15T10:00:00Z"),
        )
        .unwrap();
        // Draft: no published_at, must never be listed.
        blog::create_post(&db, "szkic", Locale::Pl, "Szkic", "", None, None).unwrap();

        let pl = blog::list_previews(&db, Locale::Pl).unwrap();
        assert_eq!(pl.len(), 2);
        assert_eq!(pl[0].slug, "drugi-wpis");
        assert_eq!(pl[1].slug, "pierwszy-wpis");

        let en = blog::list_previews(&db, Locale::En).unwrap();
        assert_eq!(en.len(), 1);

        let uk = blog::list_previews(&db, Locale::Uk).unwrap();
        assert!(uk.is_empty());
    }
}
