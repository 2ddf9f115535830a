/*!
# Introductory Tutorial for calc

Begin by opening a terminal and running the executable. You will be
greeted by a bare prompt. Type CTRL-D or `\exit` to leave.
<pre><code>&nbsp;> █
</code></pre>

calc is a reverse Polish notation calculator. Numbers are pushed onto a
stack and commands take their arguments from the top of it. Separate
statements with `;`. After every line the stack is printed, oldest value
first.

<pre><code>&nbsp;> 3;4;+
&nbsp;7
&nbsp;> 2;\pow
&nbsp;49
</code></pre>

Whitespace is deleted before a line is read, so `1 2` is the number `12`.
Use `;` between numbers. Two numbers joined by one of `+ - * /` are a
shorthand for pushing both and applying the operator.

<pre><code>&nbsp;> \clear
&nbsp;> 1/4
&nbsp;0.25
</code></pre>

Commands start with a backslash. If you forget it, calc tries again with
one added, so `swap` works as well as `\swap`. Anything that still does not
make sense prints an error and leaves the calculator ready for the next
line. Work done before the failing statement is kept.

<pre><code>&nbsp;> \clear;5;+
&nbsp;<b>ERR!</b>
&nbsp;5
</code></pre>

Names are defined with `=`. A line that is exactly a defined name is
replaced by its body. Wrap a body in parentheses to keep `;` inside it, or
in braces to compute a constant right away.

<pre><code>&nbsp;> sq=(!!;*)
&nbsp;> \clear;12;sq
&nbsp;144
&nbsp;> gross={\drop;12;sq}
&nbsp;> gross
&nbsp;144
</code></pre>

A line ending in `\` continues on the next line. The prompt changes to
`. ` until the statement is complete. CTRL-C abandons it.

<pre><code>&nbsp;> 1;2;\
&nbsp;. +
&nbsp;144 3
</code></pre>

Everything from `#` to the end of a line is a comment. Lines in the file
`.calcrc` in `$XDG_CONFIG_HOME`, or your home directory, are entered before
the first prompt. It is a good place for your names.

*/
