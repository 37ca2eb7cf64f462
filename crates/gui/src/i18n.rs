use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.new" => if ru { "Новый профиль" } else { "New profile" },
        "menu.import_profile" => if ru { "Импорт профиля..." } else { "Import Profile..." },
        "menu.import_title" => if ru { "Открыть JSON профиля" } else { "Open Profile JSON" },
        "menu.export_profile" => if ru { "Экспорт профиля..." } else { "Export Profile..." },
        "menu.export_profile_title" => if ru { "Сохранить JSON профиля" } else { "Save Profile JSON" },
        "menu.export_stl" => if ru { "Экспорт STL..." } else { "Export STL..." },
        "menu.export_stl_title" => if ru { "Экспорт тела в STL" } else { "Export Solid as STL" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.show_grid" => if ru { "Сетка" } else { "Grid" },
        "menu.show_axes" => if ru { "Оси" } else { "Axes" },
        "menu.properties" => if ru { "Свойства" } else { "Properties" },
        "menu.status_bar" => if ru { "Строка состояния" } else { "Status bar" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.frame_solid" => if ru { "Показать тело  F" } else { "Frame solid  F" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Profile canvas ──────────────────────────────────
        "canvas.axis" => if ru { "Ось вращения" } else { "Axis of revolution" },
        "canvas.hint" => if ru {
            "ЛКМ: добавить / перетащить точку · Двойной клик: удалить"
        } else {
            "Click: add / drag point · Double-click: delete"
        },

        // ── 3D preview ──────────────────────────────────────
        "viewport.nav_hint" => if ru {
            "ЛКМ: вращение · ПКМ: сдвиг · Колесо: масштаб · F: показать тело"
        } else {
            "LMB: orbit · RMB: pan · Wheel: zoom · F: frame solid"
        },
        "viewport.no_solid" => if ru { "Профиль не образует тело" } else { "Profile does not form a solid" },
        "viewport.unavailable" => if ru { "3D-просмотр недоступен" } else { "3D preview unavailable" },

        // ── Properties panel ────────────────────────────────
        "prop.title" => if ru { "Свойства" } else { "Properties" },
        "prop.select_point" => if ru { "Выберите точку" } else { "Select a point" },
        "prop.click_hint" => if ru { "Кликните по точке профиля" } else { "Click a profile point" },
        "prop.point" => if ru { "Точка" } else { "Point" },
        "prop.radius" => if ru { "Радиус" } else { "Radius" },
        "prop.height" => if ru { "Высота" } else { "Height" },
        "prop.apply" => if ru { "Применить" } else { "Apply" },
        "prop.delete_point" => if ru { "Удалить точку" } else { "Delete point" },
        "prop.deselect" => if ru { "Снять выбор" } else { "Deselect" },
        "prop.points" => if ru { "Точки профиля" } else { "Profile points" },
        "prop.solid" => if ru { "Тело вращения" } else { "Solid" },
        "prop.no_solid" => if ru { "Тело не построено" } else { "No solid" },
        "prop.triangles" => if ru { "Треугольники" } else { "Triangles" },
        "prop.diameter" => if ru { "Диаметр" } else { "Diameter" },
        "prop.length" => if ru { "Длина" } else { "Length" },
        "prop.rebuilds" => if ru { "Перестроений" } else { "Rebuilds" },

        // ── Status bar ──────────────────────────────────────
        "status.points" => if ru { "Точек" } else { "Points" },
        "status.selected" => if ru { "Выбрана" } else { "Selected" },
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.dragging" => if ru { "Перетаскивание" } else { "Dragging" },
        "status.build_failed" => if ru { "Ошибка построения" } else { "Build failed" },
        "status.profile_reset" => if ru { "Профиль сброшен" } else { "Profile reset" },
        "status.read_failed" => if ru { "Не удалось прочитать файл" } else { "Failed to read file" },
        "status.imported" => if ru { "Профиль импортирован" } else { "Profile imported" },
        "status.import_rejected" => if ru { "Профиль отклонён" } else { "Profile rejected" },
        "status.exported" => if ru { "Экспорт выполнен" } else { "Exported" },
        "status.write_failed" => if ru { "Не удалось записать файл" } else { "Failed to write file" },
        "status.no_solid" => if ru { "Нет тела для экспорта" } else { "No solid to export" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },

        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_size" => if ru { "Размер ячейки" } else { "Cell size" },
        "settings.grid_range" => if ru { "Количество линий" } else { "Grid lines" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },

        "settings.axes" => if ru { "Оси координат" } else { "Axes" },
        "settings.axes_length" => if ru { "Длина осей" } else { "Axis length" },
        "settings.axes_thickness" => if ru { "Толщина линий" } else { "Line thickness" },

        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.mesh_color" => if ru { "Цвет тела" } else { "Solid color" },

        "settings.export" => if ru { "Экспорт" } else { "Export" },
        "settings.stl_format" => if ru { "Формат STL" } else { "STL format" },
        "settings.stl_binary" => if ru { "Двоичный" } else { "Binary" },
        "settings.stl_ascii" => if ru { "Текстовый" } else { "ASCII" },

        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },

        "settings.apply" => if ru { "Сохранить" } else { "Save" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
