//! Java structure analysis and setup guide.

use lazy_static::lazy_static;
use regex::Regex;

use crate::glyph;

lazy_static! {
    static ref CLASS_NAME: Regex = Regex::new(r"public\s+class\s+(\w+)").unwrap();
}

pub(crate) fn report(code: &str) -> String {
    let has_class = code.contains("public class");
    let has_main = code.contains("public static void main");
    let has_output =
        code.contains("System.out.println") || code.contains("System.out.print");
    let has_imports = code.contains("import ");
    let has_package = code.contains("package ");

    let class_name = CLASS_NAME
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("Unknown");

    let class_note = if has_class {
        format!("({class_name})")
    } else {
        String::new()
    };
    let main_note = if has_main {
        "(Entry point found)"
    } else {
        "(No entry point)"
    };
    let output_note = if has_output { "(Console output ready)" } else { "" };
    let import_note = if has_imports { "(External libraries used)" } else { "" };
    let package_note = if has_package { "(Organized structure)" } else { "" };

    let verdict = if has_class && has_main {
        "✅ Your code structure looks ready for compilation!"
    } else {
        "⚠️ Make sure you have a public class with a main method."
    };

    // The trailing space on absent checklist notes and after "Online
    // alternatives:" is part of the template.
    format!(
        "☕ Java Analysis Complete

📁 Your Java Code:
{code}

🔍 Code Analysis:
- {} Class definition {class_note}
- {} Main method {main_note}
- {} Output statements {output_note}
- {} Import statements {import_note}
- {} Package declaration {package_note}

🚀 To Execute Java Code:
1. 📦 Java Development Kit (JDK 8+)
2. 🔧 Compilation: javac {class_name}.java
3. ▶️ Execution: java {class_name}
4. 🌐 Online alternatives: 
   • repl.it/languages/java
   • onlinegdb.com/online_java_compiler
   • tutorialspoint.com/compile_java_online.php

💡 Quick Setup Guide:
• Download OpenJDK or Oracle JDK
• Set JAVA_HOME environment variable
• Add Java bin directory to PATH
• Compile with: javac YourFile.java
• Run with: java YourClass

{verdict}",
        glyph(has_class),
        glyph(has_main),
        glyph(has_output),
        glyph(has_imports),
        glyph(has_package),
    )
}
