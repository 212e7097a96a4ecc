//! The message catalog.
//!
//! One table per product locale. Lookups never fail: an unknown locale code
//! falls back to the English table, so [`t`] always returns a usable string.

use super::locale::DEFAULT_LOCALE;

/// A translatable message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Product name shown in headers.
    AppName,
    /// One-line product description.
    Tagline,
    /// Notice that files never leave the machine.
    PrivateNotice,
    /// Blocking message shown when the host fails the capability check.
    EnvNotSupported,
    /// Label for the language preference.
    Language,
    /// Shown when the requested content does not exist.
    NotFound,
}

/// Look up a message in the given locale.
///
/// `locale` should already be resolved (see [`super::resolve_locale`]);
/// unknown codes fall back to the default locale's table.
pub fn t(locale: &str, msg: Msg) -> &'static str {
    match locale {
        "en" => en(msg),
        "zh" => zh(msg),
        "es" => es(msg),
        "pt" => pt(msg),
        "id" => id(msg),
        "fr" => fr(msg),
        "ja" => ja(msg),
        "ru" => ru(msg),
        "de" => de(msg),
        _ => t(DEFAULT_LOCALE, msg),
    }
}

fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Local Tools",
        Msg::Tagline => "A collection of useful tools, free to use, no upload, no registration.",
        Msg::PrivateNotice => {
            "📢 Your files are processed locally on this machine only and are never uploaded to any server."
        }
        Msg::EnvNotSupported => {
            "Your environment does not support the required features. Please upgrade your system or switch to a supported one."
        }
        Msg::Language => "Language",
        Msg::NotFound => "😭Content not found",
    }
}

fn zh(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "本地工具箱",
        Msg::Tagline => "一系列常用工具，免费使用，无需上传，无需注册。",
        Msg::PrivateNotice => "📢 您的文件仅在本机进行处理，不会上传至任何服务器。",
        Msg::EnvNotSupported => "您的运行环境不支持所需功能。请升级系统或更换到受支持的环境。",
        Msg::Language => "语言",
        Msg::NotFound => "😭内容未找到",
    }
}

fn es(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Herramientas Locales",
        Msg::Tagline => {
            "Una colección de herramientas útiles, uso gratuito, sin subidas, sin registro."
        }
        Msg::PrivateNotice => {
            "📢 Sus archivos se procesan localmente solo en esta máquina y nunca se suben a ningún servidor."
        }
        Msg::EnvNotSupported => {
            "Su entorno no admite las funciones requeridas. Actualice su sistema o cambie a uno compatible."
        }
        Msg::Language => "Idioma",
        Msg::NotFound => "😭Contenido no encontrado",
    }
}

fn pt(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Ferramentas Locais",
        Msg::Tagline => {
            "Uma coleção de ferramentas úteis, uso gratuito, sem upload, sem registro."
        }
        Msg::PrivateNotice => {
            "📢 Seus arquivos são processados localmente apenas nesta máquina e nunca são enviados para nenhum servidor."
        }
        Msg::EnvNotSupported => {
            "Seu ambiente não suporta os recursos necessários. Atualize seu sistema ou mude para um compatível."
        }
        Msg::Language => "Idioma",
        Msg::NotFound => "😭Conteúdo não encontrado",
    }
}

fn id(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Alat Lokal",
        Msg::Tagline => {
            "Kumpulan alat bantu yang berguna, gratis digunakan, tanpa unggah, tanpa registrasi."
        }
        Msg::PrivateNotice => {
            "📢 File Anda hanya diproses secara lokal di mesin ini dan tidak pernah diunggah ke server mana pun."
        }
        Msg::EnvNotSupported => {
            "Lingkungan Anda tidak mendukung fitur yang diperlukan. Harap perbarui sistem Anda atau beralih ke yang didukung."
        }
        Msg::Language => "Bahasa",
        Msg::NotFound => "😭Konten tidak ditemukan",
    }
}

fn fr(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Outils Locaux",
        Msg::Tagline => {
            "Une collection d'outils utiles, utilisation gratuite, sans téléversement, sans inscription."
        }
        Msg::PrivateNotice => {
            "📢 Vos fichiers sont traités localement sur cette machine uniquement et ne sont jamais envoyés vers un serveur."
        }
        Msg::EnvNotSupported => {
            "Votre environnement ne prend pas en charge les fonctionnalités requises. Veuillez mettre à jour votre système ou passer à un environnement compatible."
        }
        Msg::Language => "Langue",
        Msg::NotFound => "😭Contenu non trouvé",
    }
}

fn ja(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "ローカルツール",
        Msg::Tagline => "便利なツールのコレクション。無料で使用でき、アップロードや登録は不要です。",
        Msg::PrivateNotice => {
            "📢 ファイルはこのマシン上でのみ処理され、サーバーにアップロードされることはありません。"
        }
        Msg::EnvNotSupported => {
            "お使いの環境は必要な機能をサポートしていません。システムを更新するか、サポートされている環境に切り替えてください。"
        }
        Msg::Language => "言語",
        Msg::NotFound => "😭コンテンツが見つかりません",
    }
}

fn ru(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Локальные Инструменты",
        Msg::Tagline => {
            "Коллекция полезных инструментов, бесплатно, без загрузки, без регистрации."
        }
        Msg::PrivateNotice => {
            "📢 Ваши файлы обрабатываются только локально на этом компьютере и никогда не загружаются на серверы."
        }
        Msg::EnvNotSupported => {
            "Ваша среда не поддерживает необходимые функции. Пожалуйста, обновите систему или перейдите на поддерживаемую."
        }
        Msg::Language => "Язык",
        Msg::NotFound => "😭Содержимое не найдено",
    }
}

fn de(msg: Msg) -> &'static str {
    match msg {
        Msg::AppName => "Lokale Werkzeuge",
        Msg::Tagline => {
            "Eine Sammlung nützlicher Werkzeuge, kostenlos nutzbar, ohne Upload, ohne Registrierung."
        }
        Msg::PrivateNotice => {
            "📢 Ihre Dateien werden nur lokal auf diesem Rechner verarbeitet und niemals auf Server hochgeladen."
        }
        Msg::EnvNotSupported => {
            "Ihre Umgebung unterstützt die erforderlichen Funktionen nicht. Bitte aktualisieren Sie Ihr System oder wechseln Sie zu einer unterstützten Umgebung."
        }
        Msg::Language => "Sprache",
        Msg::NotFound => "😭Inhalt nicht gefunden",
    }
}
