// 内置哈希格式规则表。
// - 顺序即优先级：先短/宽泛的形状，后长/约束更强的形状；查询时不得重排
// - pattern 不带 ^/$ 锚点，由 `Catalogue` 统一包裹为整串、大小写不敏感匹配
// - 同一名称可以出现在多条规则下（如 PHPass 的 $H$ 与 $P$ 两种前缀）

use super::{FormatDef, RuleDef};

pub(super) static BUILTIN_RULES: &[RuleDef] = &[
    RuleDef {
        pattern: r"[a-f0-9]{4}",
        formats: &[
            FormatDef { name: "CRC-16", engine_mode: None, extended: false },
            FormatDef { name: "CRC-16-CCITT", engine_mode: None, extended: false },
            FormatDef { name: "FCS-16", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{8}",
        formats: &[
            FormatDef { name: "Adler-32", engine_mode: None, extended: false },
            FormatDef { name: "CRC-32B", engine_mode: None, extended: false },
            FormatDef { name: "FCS-32", engine_mode: None, extended: false },
            FormatDef { name: "GHash-32-3", engine_mode: None, extended: false },
            FormatDef { name: "GHash-32-5", engine_mode: None, extended: false },
            FormatDef { name: "FNV-132", engine_mode: None, extended: false },
            FormatDef { name: "Fletcher-32", engine_mode: None, extended: false },
            FormatDef { name: "Joaat", engine_mode: None, extended: false },
            FormatDef { name: "ELF-32", engine_mode: None, extended: false },
            FormatDef { name: "XOR-32", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{6}",
        formats: &[
            FormatDef { name: "CRC-24", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$crc32\$[a-f0-9]{8}.)?[a-f0-9]{8}",
        formats: &[
            FormatDef { name: "CRC-32", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\+[a-z0-9\/.]{12}",
        formats: &[
            FormatDef { name: "Eggdrop IRC Bot", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9\/.]{13}",
        formats: &[
            FormatDef { name: "DES(Unix)", engine_mode: Some(1500), extended: false },
            FormatDef { name: "Traditional DES", engine_mode: Some(1500), extended: false },
            FormatDef { name: "DEScrypt", engine_mode: Some(1500), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{16}",
        formats: &[
            FormatDef { name: "MySQL323", engine_mode: Some(200), extended: false },
            FormatDef { name: "DES(Oracle)", engine_mode: Some(3100), extended: false },
            FormatDef { name: "Half MD5", engine_mode: Some(5100), extended: false },
            FormatDef { name: "Oracle 7-10g", engine_mode: Some(3100), extended: false },
            FormatDef { name: "FNV-164", engine_mode: None, extended: false },
            FormatDef { name: "CRC-64", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9\/.]{16}",
        formats: &[
            FormatDef { name: "Cisco-PIX(MD5)", engine_mode: Some(2400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\([a-z0-9\/+]{20}\)",
        formats: &[
            FormatDef { name: "Lotus Notes/Domino 6", engine_mode: Some(8700), extended: false },
        ],
    },
    RuleDef {
        pattern: r"_[a-z0-9\/.]{19}",
        formats: &[
            FormatDef { name: "BSDi Crypt", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{24}",
        formats: &[
            FormatDef { name: "CRC-96(ZIP)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9\/.]{24}",
        formats: &[
            FormatDef { name: "Crypt16", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$md2\$)?[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "MD2", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}(:.+)?",
        formats: &[
            FormatDef { name: "MD5", engine_mode: Some(0), extended: false },
            FormatDef { name: "MD4", engine_mode: Some(900), extended: false },
            FormatDef { name: "Double MD5", engine_mode: Some(2600), extended: false },
            FormatDef { name: "LM", engine_mode: Some(3000), extended: false },
            FormatDef { name: "RIPEMD-128", engine_mode: None, extended: false },
            FormatDef { name: "Haval-128", engine_mode: None, extended: false },
            FormatDef { name: "Tiger-128", engine_mode: None, extended: false },
            FormatDef { name: "Skein-256(128)", engine_mode: None, extended: false },
            FormatDef { name: "Skein-512(128)", engine_mode: None, extended: false },
            FormatDef { name: "Lotus Notes/Domino 5", engine_mode: Some(8600), extended: false },
            FormatDef { name: "Skype", engine_mode: Some(23), extended: false },
            FormatDef { name: "ZipMonster", engine_mode: None, extended: true },
            FormatDef { name: "PrestaShop", engine_mode: Some(11000), extended: true },
            FormatDef { name: "md5(md5(md5($pass)))", engine_mode: Some(3500), extended: true },
            FormatDef { name: "md5(strtoupper(md5($pass)))", engine_mode: Some(4300), extended: true },
            FormatDef { name: "md5(sha1($pass))", engine_mode: Some(4400), extended: true },
            FormatDef { name: "md5($pass.$salt)", engine_mode: Some(10), extended: true },
            FormatDef { name: "md5($salt.$pass)", engine_mode: Some(20), extended: true },
            FormatDef { name: "md5(unicode($pass).$salt)", engine_mode: Some(30), extended: true },
            FormatDef { name: "md5($salt.unicode($pass))", engine_mode: Some(40), extended: true },
            FormatDef { name: "HMAC-MD5 (key = $pass)", engine_mode: Some(50), extended: true },
            FormatDef { name: "HMAC-MD5 (key = $salt)", engine_mode: Some(60), extended: true },
            FormatDef { name: "md5(md5($salt).$pass)", engine_mode: Some(3610), extended: true },
            FormatDef { name: "md5($salt.md5($pass))", engine_mode: Some(3710), extended: true },
            FormatDef { name: "md5($pass.md5($salt))", engine_mode: Some(3720), extended: true },
            FormatDef { name: "md5($salt.$pass.$salt)", engine_mode: Some(3810), extended: true },
            FormatDef { name: "md5(md5($pass).md5($salt))", engine_mode: Some(3910), extended: true },
            FormatDef { name: "md5($salt.md5($salt.$pass))", engine_mode: Some(4010), extended: true },
            FormatDef { name: "md5($salt.md5($pass.$salt))", engine_mode: Some(4110), extended: true },
            FormatDef { name: "md5($username.0.$pass)", engine_mode: Some(4210), extended: true },
        ],
    },
    RuleDef {
        pattern: r"(\$snefru\$)?[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "Snefru-128", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$NT\$)?[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "NTLM", engine_mode: Some(1000), extended: false },
        ],
    },
    RuleDef {
        pattern: r#"([^\\\/:*?"<>|]{1,20}:)?[a-f0-9]{32}(:[^\\\/:*?"<>|]{1,20})?"#,
        formats: &[
            FormatDef { name: "Domain Cached Credentials", engine_mode: Some(1100), extended: false },
        ],
    },
    RuleDef {
        pattern: r#"([^\\\/:*?"<>|]{1,20}:)?(\$DCC2\$10240#[^\\\/:*?"<>|]{1,20}#)?[a-f0-9]{32}"#,
        formats: &[
            FormatDef { name: "Domain Cached Credentials 2", engine_mode: Some(2100), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{SHA\}[a-z0-9\/+]{27}=",
        formats: &[
            FormatDef { name: "SHA-1(Base64)", engine_mode: Some(101), extended: false },
            FormatDef { name: "Netscape LDAP SHA", engine_mode: Some(101), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$1\$[a-z0-9\/.]{0,8}\$[a-z0-9\/.]{22}(:.*)?",
        formats: &[
            FormatDef { name: "MD5 Crypt", engine_mode: Some(500), extended: false },
            FormatDef { name: "Cisco-IOS(MD5)", engine_mode: Some(500), extended: false },
            FormatDef { name: "FreeBSD MD5", engine_mode: Some(500), extended: false },
        ],
    },
    RuleDef {
        pattern: r"0x[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "Lineage II C4", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$H\$[a-z0-9\/.]{31}",
        formats: &[
            FormatDef { name: "phpBB v3.x", engine_mode: Some(400), extended: false },
            FormatDef { name: "Wordpress v2.6.0/2.6.1", engine_mode: Some(400), extended: false },
            FormatDef { name: "PHPass' Portable Hash", engine_mode: Some(400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$P\$[a-z0-9\/.]{31}",
        formats: &[
            FormatDef { name: "Wordpress ≥ v2.6.2", engine_mode: Some(400), extended: false },
            FormatDef { name: "Joomla ≥ v2.5.18", engine_mode: Some(400), extended: false },
            FormatDef { name: "PHPass' Portable Hash", engine_mode: Some(400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:[a-z0-9]{2}",
        formats: &[
            FormatDef { name: "osCommerce", engine_mode: Some(21), extended: false },
            FormatDef { name: "xt:Commerce", engine_mode: Some(21), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$apr1\$[a-z0-9\/.]{0,8}\$[a-z0-9\/.]{22}",
        formats: &[
            FormatDef { name: "MD5(APR)", engine_mode: Some(1600), extended: false },
            FormatDef { name: "Apache MD5", engine_mode: Some(1600), extended: false },
            FormatDef { name: "md5apr1", engine_mode: Some(1600), extended: true },
        ],
    },
    RuleDef {
        pattern: r"\{smd5\}[a-z0-9$\/.]{31}",
        formats: &[
            FormatDef { name: "AIX(smd5)", engine_mode: Some(6300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "WebEdition CMS", engine_mode: Some(3721), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:.{5}",
        formats: &[
            FormatDef { name: "IP.Board ≥ v2+", engine_mode: Some(2811), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:.{8}",
        formats: &[
            FormatDef { name: "MyBB ≥ v1.2+", engine_mode: Some(2811), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9]{34}",
        formats: &[
            FormatDef { name: "CryptoCurrency(Adress)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{40}(:.+)?",
        formats: &[
            FormatDef { name: "SHA-1", engine_mode: Some(100), extended: false },
            FormatDef { name: "Double SHA-1", engine_mode: Some(4500), extended: false },
            FormatDef { name: "RIPEMD-160", engine_mode: Some(6000), extended: false },
            FormatDef { name: "Haval-160", engine_mode: None, extended: false },
            FormatDef { name: "Tiger-160", engine_mode: None, extended: false },
            FormatDef { name: "HAS-160", engine_mode: None, extended: false },
            FormatDef { name: "LinkedIn", engine_mode: Some(190), extended: false },
            FormatDef { name: "Skein-256(160)", engine_mode: None, extended: false },
            FormatDef { name: "Skein-512(160)", engine_mode: None, extended: false },
            FormatDef { name: "MangosWeb Enhanced CMS", engine_mode: None, extended: true },
            FormatDef { name: "sha1(sha1(sha1($pass)))", engine_mode: Some(4600), extended: true },
            FormatDef { name: "sha1(md5($pass))", engine_mode: Some(4700), extended: true },
            FormatDef { name: "sha1($pass.$salt)", engine_mode: Some(110), extended: true },
            FormatDef { name: "sha1($salt.$pass)", engine_mode: Some(120), extended: true },
            FormatDef { name: "sha1(unicode($pass).$salt)", engine_mode: Some(130), extended: true },
            FormatDef { name: "sha1($salt.unicode($pass))", engine_mode: Some(140), extended: true },
            FormatDef { name: "HMAC-SHA1 (key = $pass)", engine_mode: Some(150), extended: true },
            FormatDef { name: "HMAC-SHA1 (key = $salt)", engine_mode: Some(160), extended: true },
            FormatDef { name: "sha1($salt.$pass.$salt)", engine_mode: Some(4710), extended: true },
        ],
    },
    RuleDef {
        pattern: r"\*[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "MySQL5.x", engine_mode: Some(300), extended: false },
            FormatDef { name: "MySQL4.1", engine_mode: Some(300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9]{43}",
        formats: &[
            FormatDef { name: "Cisco-IOS(SHA-256)", engine_mode: Some(5700), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{SSHA\}[a-z0-9\/+]{38}==",
        formats: &[
            FormatDef { name: "SSHA-1(Base64)", engine_mode: Some(111), extended: false },
            FormatDef { name: "Netscape LDAP SSHA", engine_mode: Some(111), extended: false },
            FormatDef { name: "nsldaps", engine_mode: Some(111), extended: true },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9=]{47}",
        formats: &[
            FormatDef { name: "Fortigate(FortiOS)", engine_mode: Some(7000), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{48}",
        formats: &[
            FormatDef { name: "Haval-192", engine_mode: None, extended: false },
            FormatDef { name: "Tiger-192", engine_mode: None, extended: false },
            FormatDef { name: "SHA-1(Oracle)", engine_mode: None, extended: false },
            FormatDef { name: "OSX v10.4", engine_mode: Some(122), extended: false },
            FormatDef { name: "OSX v10.5", engine_mode: Some(122), extended: false },
            FormatDef { name: "OSX v10.6", engine_mode: Some(122), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{51}",
        formats: &[
            FormatDef { name: "Palshop CMS", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9]{51}",
        formats: &[
            FormatDef { name: "CryptoCurrency(PrivateKey)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{ssha1\}[0-9]{2}\$[a-z0-9$\/.]{44}",
        formats: &[
            FormatDef { name: "AIX(ssha1)", engine_mode: Some(6700), extended: false },
        ],
    },
    RuleDef {
        pattern: r"0x0100[a-f0-9]{48}",
        formats: &[
            FormatDef { name: "MSSQL(2005)", engine_mode: Some(132), extended: false },
            FormatDef { name: "MSSQL(2008)", engine_mode: Some(132), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$md5,rounds=[0-9]+\$|\$md5\$rounds=[0-9]+\$|\$md5\$)[a-z0-9\/.]{0,16}(\$|\$\$)[a-z0-9\/.]{22}",
        formats: &[
            FormatDef { name: "Sun MD5 Crypt", engine_mode: Some(3300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{56}",
        formats: &[
            FormatDef { name: "SHA-224", engine_mode: None, extended: false },
            FormatDef { name: "Haval-224", engine_mode: None, extended: false },
            FormatDef { name: "SHA3-224", engine_mode: None, extended: false },
            FormatDef { name: "Skein-256(224)", engine_mode: None, extended: false },
            FormatDef { name: "Skein-512(224)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$2[axy]|\$2)\$[0-9]{2}\$[a-z0-9\/.]{53}",
        formats: &[
            FormatDef { name: "Blowfish(OpenBSD)", engine_mode: Some(3200), extended: false },
            FormatDef { name: "Woltlab Burning Board 4.x", engine_mode: None, extended: false },
            FormatDef { name: "bcrypt", engine_mode: Some(3200), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{40}:[a-f0-9]{16}",
        formats: &[
            FormatDef { name: "Android PIN", engine_mode: Some(5800), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(S:)?[a-f0-9]{40}(:)?[a-f0-9]{20}",
        formats: &[
            FormatDef { name: "Oracle 11g/12c", engine_mode: Some(112), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$bcrypt-sha256\$(2[axy]|2)\,[0-9]+\$[a-z0-9\/.]{22}\$[a-z0-9\/.]{31}",
        formats: &[
            FormatDef { name: "bcrypt(SHA-256)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:.{3}",
        formats: &[
            FormatDef { name: "vBulletin < v3.8.5", engine_mode: Some(2611), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:.{30}",
        formats: &[
            FormatDef { name: "vBulletin ≥ v3.8.5", engine_mode: Some(2711), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$snefru\$)?[a-f0-9]{64}",
        formats: &[
            FormatDef { name: "Snefru-256", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{64}(:.+)?",
        formats: &[
            FormatDef { name: "SHA-256", engine_mode: Some(1400), extended: false },
            FormatDef { name: "RIPEMD-256", engine_mode: None, extended: false },
            FormatDef { name: "Haval-256", engine_mode: None, extended: false },
            FormatDef { name: "GOST R 34.11-94", engine_mode: Some(6900), extended: false },
            FormatDef { name: "GOST CryptoPro S-Box", engine_mode: None, extended: false },
            FormatDef { name: "SHA3-256", engine_mode: Some(5000), extended: false },
            FormatDef { name: "Skein-256", engine_mode: None, extended: false },
            FormatDef { name: "Skein-512(256)", engine_mode: None, extended: false },
            FormatDef { name: "Ventrilo", engine_mode: None, extended: true },
            FormatDef { name: "sha256($pass.$salt)", engine_mode: Some(1410), extended: true },
            FormatDef { name: "sha256($salt.$pass)", engine_mode: Some(1420), extended: true },
            FormatDef { name: "sha256(unicode($pass).$salt)", engine_mode: Some(1430), extended: true },
            FormatDef { name: "sha256($salt.unicode($pass))", engine_mode: Some(1440), extended: true },
            FormatDef { name: "HMAC-SHA256 (key = $pass)", engine_mode: Some(1450), extended: true },
            FormatDef { name: "HMAC-SHA256 (key = $salt)", engine_mode: Some(1460), extended: true },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:[a-z0-9]{32}",
        formats: &[
            FormatDef { name: "Joomla < v2.5.18", engine_mode: Some(11), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f-0-9]{32}:[a-f-0-9]{32}",
        formats: &[
            FormatDef { name: "SAM(LM_Hash:NT_Hash)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$chap\$0\*)?[a-f0-9]{32}[\*:][a-f0-9]{32}(:[0-9]{2})?",
        formats: &[
            FormatDef { name: "MD5(Chap)", engine_mode: Some(4800), extended: false },
            FormatDef { name: "iSCSI CHAP Authentication", engine_mode: Some(4800), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$episerver\$\*0\*[a-z0-9\/=+]+\*[a-z0-9\/=+]{27,28}",
        formats: &[
            FormatDef { name: "EPiServer 6.x < v4", engine_mode: Some(141), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{ssha256\}[0-9]{2}\$[a-z0-9$\/.]{60}",
        formats: &[
            FormatDef { name: "AIX(ssha256)", engine_mode: Some(6400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{80}",
        formats: &[
            FormatDef { name: "RIPEMD-320", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$episerver\$\*1\*[a-z0-9\/=+]+\*[a-z0-9\/=+]{42,43}",
        formats: &[
            FormatDef { name: "EPiServer 6.x ≥ v4", engine_mode: Some(1441), extended: false },
        ],
    },
    RuleDef {
        pattern: r"0x0100[a-f0-9]{88}",
        formats: &[
            FormatDef { name: "MSSQL(2000)", engine_mode: Some(131), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{96}",
        formats: &[
            FormatDef { name: "SHA-384", engine_mode: Some(10800), extended: false },
            FormatDef { name: "SHA3-384", engine_mode: None, extended: false },
            FormatDef { name: "Skein-512(384)", engine_mode: None, extended: false },
            FormatDef { name: "Skein-1024(384)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{SSHA512\}[a-z0-9\/+]{96}",
        formats: &[
            FormatDef { name: "SSHA-512(Base64)", engine_mode: Some(1711), extended: false },
            FormatDef { name: "LDAP(SSHA-512)", engine_mode: Some(1711), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{ssha512\}[0-9]{2}\$[a-z0-9\/.]{16,48}\$[a-z0-9\/.]{86}",
        formats: &[
            FormatDef { name: "AIX(ssha512)", engine_mode: Some(6500), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{128}(:.+)?",
        formats: &[
            FormatDef { name: "SHA-512", engine_mode: Some(1700), extended: false },
            FormatDef { name: "Whirlpool", engine_mode: Some(6100), extended: false },
            FormatDef { name: "Salsa10", engine_mode: None, extended: false },
            FormatDef { name: "Salsa20", engine_mode: None, extended: false },
            FormatDef { name: "SHA3-512", engine_mode: None, extended: false },
            FormatDef { name: "Skein-512", engine_mode: None, extended: false },
            FormatDef { name: "Skein-1024(512)", engine_mode: None, extended: false },
            FormatDef { name: "sha512($pass.$salt)", engine_mode: Some(1710), extended: true },
            FormatDef { name: "sha512($salt.$pass)", engine_mode: Some(1720), extended: true },
            FormatDef { name: "sha512(unicode($pass).$salt)", engine_mode: Some(1730), extended: true },
            FormatDef { name: "sha512($salt.unicode($pass))", engine_mode: Some(1740), extended: true },
            FormatDef { name: "HMAC-SHA512 (key = $pass)", engine_mode: Some(1750), extended: true },
            FormatDef { name: "HMAC-SHA512 (key = $salt)", engine_mode: Some(1760), extended: true },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{136}",
        formats: &[
            FormatDef { name: "OSX v10.7", engine_mode: Some(1722), extended: false },
        ],
    },
    RuleDef {
        pattern: r"0x0200[a-f0-9]{136}",
        formats: &[
            FormatDef { name: "MSSQL(2012)", engine_mode: Some(1731), extended: false },
            FormatDef { name: "MSSQL(2014)", engine_mode: Some(1731), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$ml\$[0-9]+\$[a-f0-9]{64}\$[a-f0-9]{128}",
        formats: &[
            FormatDef { name: "OSX v10.8", engine_mode: Some(7100), extended: false },
            FormatDef { name: "OSX v10.9", engine_mode: Some(7100), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{256}",
        formats: &[
            FormatDef { name: "Skein-1024", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"grub\.pbkdf2\.sha512\.[0-9]+\.([a-f0-9]{128,2048}\.|[0-9]+\.)?[a-f0-9]{128}",
        formats: &[
            FormatDef { name: "GRUB 2", engine_mode: Some(7200), extended: false },
        ],
    },
    RuleDef {
        pattern: r"sha1\$[a-z0-9]+\$[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "Django(SHA-1)", engine_mode: Some(124), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{49}",
        formats: &[
            FormatDef { name: "Citrix Netscaler", engine_mode: Some(8100), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$S\$[a-z0-9\/.]{52}",
        formats: &[
            FormatDef { name: "Drupal > v7.x", engine_mode: Some(7900), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$5\$(rounds=[0-9]+\$)?[a-z0-9\/.]{0,16}\$[a-z0-9\/.]{43}",
        formats: &[
            FormatDef { name: "SHA-256 Crypt", engine_mode: Some(7400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"0x[a-f0-9]{4}[a-f0-9]{16}[a-f0-9]{64}",
        formats: &[
            FormatDef { name: "Sybase ASE", engine_mode: Some(8000), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$6\$(rounds=[0-9]+\$)?[a-z0-9\/.]{0,16}\$[a-z0-9\/.]{86}",
        formats: &[
            FormatDef { name: "SHA-512 Crypt", engine_mode: Some(1800), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$sha\$[a-z0-9]{1,16}\$([a-f0-9]{32}|[a-f0-9]{40}|[a-f0-9]{64}|[a-f0-9]{128}|[a-f0-9]{140})",
        formats: &[
            FormatDef { name: "Minecraft(AuthMe Reloaded)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"sha256\$[a-z0-9]+\$[a-f0-9]{64}",
        formats: &[
            FormatDef { name: "Django(SHA-256)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"sha384\$[a-z0-9]+\$[a-f0-9]{96}",
        formats: &[
            FormatDef { name: "Django(SHA-384)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"crypt1:[a-z0-9+=]{12}:[a-z0-9+=]{12}",
        formats: &[
            FormatDef { name: "Clavister Secure Gateway", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{112}",
        formats: &[
            FormatDef { name: "Cisco VPN Client(PCF-File)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{1329}",
        formats: &[
            FormatDef { name: "Microsoft MSTSC(RDP-File)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r#"[^\\\/:*?"<>|]{1,20}[:]{2,3}([^\\\/:*?"<>|]{1,20})?:[a-f0-9]{48}:[a-f0-9]{48}:[a-f0-9]{16}"#,
        formats: &[
            FormatDef { name: "NetNTLMv1-VANILLA / NetNTLMv1+ESS", engine_mode: Some(5500), extended: false },
        ],
    },
    RuleDef {
        pattern: r#"([^\\\/:*?"<>|]{1,20}\\)?[^\\\/:*?"<>|]{1,20}[:]{2,3}([^\\\/:*?"<>|]{1,20}:)?[^\\\/:*?"<>|]{1,20}:[a-f0-9]{32}:[a-f0-9]+"#,
        formats: &[
            FormatDef { name: "NetNTLMv2", engine_mode: Some(5600), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$(krb5pa|mskrb5)\$([0-9]{2})?\$.+\$[a-f0-9]{1,}",
        formats: &[
            FormatDef { name: "Kerberos 5 AS-REQ Pre-Auth", engine_mode: Some(7500), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$scram\$[0-9]+\$[a-z0-9\/.]{16}\$sha-1=[a-z0-9\/.]{27},sha-256=[a-z0-9\/.]{43},sha-512=[a-z0-9\/.]{86}",
        formats: &[
            FormatDef { name: "SCRAM Hash", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{40}:[a-f0-9]{0,32}",
        formats: &[
            FormatDef { name: "Redmine Project Management Web App", engine_mode: Some(7600), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(.+)?\$[a-f0-9]{16}",
        formats: &[
            FormatDef { name: "SAP CODVN B (BCODE)", engine_mode: Some(7700), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(.+)?\$[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "SAP CODVN F/G (PASSCODE)", engine_mode: Some(7800), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(.+\$)?[a-z0-9\/.+]{30}(:.+)?",
        formats: &[
            FormatDef { name: "Juniper Netscreen/SSG(ScreenOS)", engine_mode: Some(22), extended: false },
        ],
    },
    RuleDef {
        pattern: r"0x[a-f0-9]{60}\s0x[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "EPi", engine_mode: Some(123), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{40}:[^*]{1,25}",
        formats: &[
            FormatDef { name: "SMF ≥ v1.1", engine_mode: Some(121), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$wbb3\$\*1\*)?[a-f0-9]{40}[:*][a-f0-9]{40}",
        formats: &[
            FormatDef { name: "Woltlab Burning Board 3.x", engine_mode: Some(8400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{130}(:[a-f0-9]{40})?",
        formats: &[
            FormatDef { name: "IPMI2 RAKP HMAC-SHA1", engine_mode: Some(7300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{32}:[0-9]+:[a-z0-9_.+-]+@[a-z0-9-]+\.[a-z0-9-.]+",
        formats: &[
            FormatDef { name: "Lastpass", engine_mode: Some(6800), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9\/.]{16}([:$].{1,})?",
        formats: &[
            FormatDef { name: "Cisco-ASA(MD5)", engine_mode: Some(2410), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$vnc\$\*[a-f0-9]{32}\*[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "VNC", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9]{32}(:([a-z0-9-]+\.)?[a-z0-9-.]+\.[a-z]{2,7}:.+:[0-9]+)?",
        formats: &[
            FormatDef { name: "DNSSEC(NSEC3)", engine_mode: Some(8300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(user-.+:)?\$racf\$\*.+\*[a-f0-9]{16}",
        formats: &[
            FormatDef { name: "RACF", engine_mode: Some(8500), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$3\$\$[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "NTHash(FreeBSD Variant)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$sha1\$[0-9]+\$[a-z0-9\/.]{0,64}\$[a-z0-9\/.]{28}",
        formats: &[
            FormatDef { name: "SHA-1 Crypt", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{70}",
        formats: &[
            FormatDef { name: "hMailServer", engine_mode: Some(1421), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[:\$][AB][:\$]([a-f0-9]{1,8}[:\$])?[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "MediaWiki", engine_mode: Some(3711), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{140}",
        formats: &[
            FormatDef { name: "Minecraft(xAuth)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$pbkdf2(-sha1)?\$[0-9]+\$[a-z0-9\/.]+\$[a-z0-9\/.]{27}",
        formats: &[
            FormatDef { name: "PBKDF2-SHA1(Generic)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$pbkdf2-sha256\$[0-9]+\$[a-z0-9\/.]+\$[a-z0-9\/.]{43}",
        formats: &[
            FormatDef { name: "PBKDF2-SHA256(Generic)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$pbkdf2-sha512\$[0-9]+\$[a-z0-9\/.]+\$[a-z0-9\/.]{86}",
        formats: &[
            FormatDef { name: "PBKDF2-SHA512(Generic)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$p5k2\$[0-9]+\$[a-z0-9\/+=-]+\$[a-z0-9\/+-]{27}=",
        formats: &[
            FormatDef { name: "PBKDF2(Cryptacular)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$p5k2\$[0-9]+\$[a-z0-9\/.]+\$[a-z0-9\/.]{32}",
        formats: &[
            FormatDef { name: "PBKDF2(Dwayne Litzenberger)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{FSHP[0123]\|[0-9]+\|[0-9]+\}[a-z0-9\/+=]+",
        formats: &[
            FormatDef { name: "Fairly Secure Hashed Password", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$PHPS\$.+\$[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "PHPS", engine_mode: Some(2612), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[0-9]{4}:[a-f0-9]{16}:[a-f0-9]{2080}",
        formats: &[
            FormatDef { name: "1Password(Agile Keychain)", engine_mode: Some(6600), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{64}:[a-f0-9]{32}:[0-9]{5}:[a-f0-9]{608}",
        formats: &[
            FormatDef { name: "1Password(Cloud Keychain)", engine_mode: Some(8200), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{256}:[a-f0-9]{256}:[a-f0-9]{16}:[a-f0-9]{16}:[a-f0-9]{320}:[a-f0-9]{16}:[a-f0-9]{40}:[a-f0-9]{40}:[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "IKE-PSK MD5", engine_mode: Some(5300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{256}:[a-f0-9]{256}:[a-f0-9]{16}:[a-f0-9]{16}:[a-f0-9]{320}:[a-f0-9]{16}:[a-f0-9]{40}:[a-f0-9]{40}:[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "IKE-PSK SHA1", engine_mode: Some(5400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9\/+]{27}=",
        formats: &[
            FormatDef { name: "PeopleSoft", engine_mode: Some(133), extended: false },
        ],
    },
    RuleDef {
        pattern: r"crypt\$[a-f0-9]{5}\$[a-z0-9\/.]{13}",
        formats: &[
            FormatDef { name: "Django(DES Crypt Wrapper)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$django\$\*1\*)?pbkdf2_sha256\$[0-9]+\$[a-z0-9]+\$[a-z0-9\/+=]{44}",
        formats: &[
            FormatDef { name: "Django(PBKDF2-HMAC-SHA256)", engine_mode: Some(10000), extended: false },
        ],
    },
    RuleDef {
        pattern: r"pbkdf2_sha1\$[0-9]+\$[a-z0-9]+\$[a-z0-9\/+=]{28}",
        formats: &[
            FormatDef { name: "Django(PBKDF2-HMAC-SHA1)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"bcrypt(\$2[axy]|\$2)\$[0-9]{2}\$[a-z0-9\/.]{53}",
        formats: &[
            FormatDef { name: "Django(bcrypt)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"md5\$[a-f0-9]+\$[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "Django(MD5)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{PKCS5S2\}[a-z0-9\/+]{64}",
        formats: &[
            FormatDef { name: "PBKDF2(Atlassian)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"md5[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "PostgreSQL MD5", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\([a-z0-9\/+]{49}\)",
        formats: &[
            FormatDef { name: "Lotus Notes/Domino 8", engine_mode: Some(9100), extended: false },
        ],
    },
    RuleDef {
        pattern: r"SCRYPT:[0-9]{1,}:[0-9]{1}:[0-9]{1}:[a-z0-9:\/+=]{1,}",
        formats: &[
            FormatDef { name: "scrypt", engine_mode: Some(8900), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$8\$[a-z0-9\/.]{14}\$[a-z0-9\/.]{43}",
        formats: &[
            FormatDef { name: "Cisco Type 8", engine_mode: Some(9200), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$9\$[a-z0-9\/.]{14}\$[a-z0-9\/.]{43}",
        formats: &[
            FormatDef { name: "Cisco Type 9", engine_mode: Some(9300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$office\$\*2007\*[0-9]{2}\*[0-9]{3}\*[0-9]{2}\*[a-z0-9]{32}\*[a-z0-9]{32}\*[a-z0-9]{40}",
        formats: &[
            FormatDef { name: "Microsoft Office 2007", engine_mode: Some(9400), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$office\$\*2010\*[0-9]{6}\*[0-9]{3}\*[0-9]{2}\*[a-z0-9]{32}\*[a-z0-9]{32}\*[a-z0-9]{64}",
        formats: &[
            FormatDef { name: "Microsoft Office 2010", engine_mode: Some(9500), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$office\$\*2013\*[0-9]{6}\*[0-9]{3}\*[0-9]{2}\*[a-z0-9]{32}\*[a-z0-9]{32}\*[a-z0-9]{64}",
        formats: &[
            FormatDef { name: "Microsoft Office 2013", engine_mode: Some(9600), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$fde\$[0-9]{2}\$[a-f0-9]{32}\$[0-9]{2}\$[a-f0-9]{32}\$[a-f0-9]{3072}",
        formats: &[
            FormatDef { name: "Android FDE ≤ 4.3", engine_mode: Some(8800), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$oldoffice\$[01]\*[a-f0-9]{32}\*[a-f0-9]{32}\*[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "Microsoft Office ≤ 2003 (MD5+RC4)", engine_mode: Some(9700), extended: false },
            FormatDef { name: "Microsoft Office ≤ 2003 (MD5+RC4) collider-mode #1", engine_mode: Some(9710), extended: false },
            FormatDef { name: "Microsoft Office ≤ 2003 (MD5+RC4) collider-mode #2", engine_mode: Some(9720), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$oldoffice\$[34]\*[a-f0-9]{32}\*[a-f0-9]{32}\*[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "Microsoft Office ≤ 2003 (SHA1+RC4)", engine_mode: Some(9800), extended: false },
            FormatDef { name: "Microsoft Office ≤ 2003 (SHA1+RC4) collider-mode #1", engine_mode: Some(9810), extended: false },
            FormatDef { name: "Microsoft Office ≤ 2003 (SHA1+RC4) collider-mode #2", engine_mode: Some(9820), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$radmin2\$)?[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "RAdmin v2.x", engine_mode: Some(9900), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\{x-issha,\s[0-9]{4}\}[a-z0-9\/+=]+",
        formats: &[
            FormatDef { name: "SAP CODVN H (PWDSALTEDHASH) iSSHA-1", engine_mode: Some(10300), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$cram_md5\$[a-z0-9\/+=-]+\$[a-z0-9\/+=-]{52}",
        formats: &[
            FormatDef { name: "CRAM-MD5", engine_mode: Some(10200), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{16}:2:4:[a-f0-9]{32}",
        formats: &[
            FormatDef { name: "SipHash", engine_mode: Some(10100), extended: false },
        ],
    },
    RuleDef {
        pattern: r"[a-f0-9]{4,}",
        formats: &[
            FormatDef { name: "Cisco Type 7", engine_mode: None, extended: true },
        ],
    },
    RuleDef {
        pattern: r"[a-z0-9\/.]{13,}",
        formats: &[
            FormatDef { name: "BigCrypt", engine_mode: None, extended: true },
        ],
    },
    RuleDef {
        pattern: r"(\$cisco4\$)?[a-z0-9\/.]{43}",
        formats: &[
            FormatDef { name: "Cisco Type 4", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"bcrypt_sha256\$\$(2[axy]|2)\$[0-9]+\$[a-z0-9\/.]{53}",
        formats: &[
            FormatDef { name: "Django(bcrypt-SHA256)", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$postgres\$.[^\*]+[*:][a-f0-9]{1,32}[*:][a-f0-9]{32}",
        formats: &[
            FormatDef { name: "PostgreSQL Challenge-Response Authentication (MD5)", engine_mode: Some(11100), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$siemens-s7\$[0-9]{1}\$[a-f0-9]{40}\$[a-f0-9]{40}",
        formats: &[
            FormatDef { name: "Siemens-S7", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$pst\$)?[a-f0-9]{8}",
        formats: &[
            FormatDef { name: "Microsoft Outlook PST", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"sha256[:$][0-9]+[:$][a-z0-9\/+]+[:$][a-z0-9\/+]{32,128}",
        formats: &[
            FormatDef { name: "PBKDF2-HMAC-SHA256(PHP)", engine_mode: Some(10900), extended: false },
        ],
    },
    RuleDef {
        pattern: r"(\$dahua\$)?[a-z0-9]{8}",
        formats: &[
            FormatDef { name: "Dahua", engine_mode: None, extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$mysqlna\$[a-f0-9]{40}[:*][a-f0-9]{40}",
        formats: &[
            FormatDef { name: "MySQL Challenge-Response Authentication (SHA1)", engine_mode: Some(11200), extended: false },
        ],
    },
    RuleDef {
        pattern: r"\$pdf\$[24]\*[34]\*128\*[0-9-]{1,5}\*1\*(16|32)\*[a-f0-9]{32,64}\*32\*[a-f0-9]{64}\*(8|16|32)\*[a-f0-9]{16,64}",
        formats: &[
            FormatDef { name: "PDF 1.4 - 1.6 (Acrobat 5 - 8)", engine_mode: Some(10500), extended: false },
        ],
    },
];
